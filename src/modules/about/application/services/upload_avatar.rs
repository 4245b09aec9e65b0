use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

use crate::about::application::ports::incoming::use_cases::{
    AvatarUpload, UploadAvatarError, UploadAvatarUseCase,
};
use crate::about::application::ports::outgoing::introduction::IntroductionRepository;
use crate::about::application::ports::outgoing::profile::ProfileRepository;
use crate::auth::domain::entities::UserId;
use crate::media::application::ports::outgoing::{ObjectStorage, UploadOptions};
use crate::media::domain::storage_key::avatar_key;
use crate::media::domain::upload_policy::ImagePolicy;

pub struct UploadAvatarService<P, I>
where
    P: ProfileRepository,
    I: IntroductionRepository,
{
    policy: ImagePolicy,
    storage: Arc<dyn ObjectStorage>,
    profiles: P,
    introduction: I,
}

impl<P, I> UploadAvatarService<P, I>
where
    P: ProfileRepository,
    I: IntroductionRepository,
{
    pub fn new(
        policy: ImagePolicy,
        storage: Arc<dyn ObjectStorage>,
        profiles: P,
        introduction: I,
    ) -> Self {
        Self {
            policy,
            storage,
            profiles,
            introduction,
        }
    }
}

#[async_trait]
impl<P, I> UploadAvatarUseCase for UploadAvatarService<P, I>
where
    P: ProfileRepository + Send + Sync,
    I: IntroductionRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        upload: AvatarUpload,
    ) -> Result<String, UploadAvatarError> {
        self.policy
            .check(&upload.content_type, upload.bytes.len())
            .map_err(|e| UploadAvatarError::InvalidImage(e.to_string()))?;

        let key = avatar_key(owner.value(), &upload.file_name);

        self.storage
            .upload(
                &key,
                upload.bytes,
                &upload.content_type,
                UploadOptions::default(),
            )
            .await
            .map_err(|e| UploadAvatarError::StorageError(e.to_string()))?;

        let url = self.storage.public_url(&key);

        self.profiles
            .update_avatar_url(owner.value(), &url)
            .await
            .map_err(|e| UploadAvatarError::RepositoryError(e.to_string()))?;

        // The introduction row shows the same avatar. The object is already
        // stored and the profile updated, so a failure here is logged and
        // surfaced on the next edit instead of failing the whole upload.
        if let Err(e) = self.introduction.set_avatar_url(&url).await {
            error!("Avatar uploaded but introduction row not updated: {}", e);
        }

        Ok(url)
    }
}
