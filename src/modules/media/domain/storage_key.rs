use rand::{distributions::Alphanumeric, Rng};
use uuid::Uuid;

/// Storage prefixes inside the site bucket.
pub const AVATAR_PREFIX: &str = "profileimage";
pub const PROJECT_PREFIX: &str = "projects";

fn random_suffix() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}

fn extension(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
        .unwrap_or("bin")
}

/// `profileimage/{user}-{random}.{ext}` - collision-resistant so repeated
/// uploads never overwrite each other by accident.
pub fn avatar_key(user_id: Uuid, file_name: &str) -> String {
    format!(
        "{}/{}-{}.{}",
        AVATAR_PREFIX,
        user_id,
        random_suffix(),
        extension(file_name)
    )
}

/// `projects/{slug}/{index}-{random}.{ext}` - namespaced by the owning
/// project so a bucket listing stays navigable.
pub fn project_image_key(slug: &str, index: usize, file_name: &str) -> String {
    format!(
        "{}/{}/{}-{}.{}",
        PROJECT_PREFIX,
        slug,
        index,
        random_suffix(),
        extension(file_name)
    )
}
