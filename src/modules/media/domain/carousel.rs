use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::youtube;

/// Auto-advance period; any manual interaction cancels the timer.
pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselItem {
    Image { url: String },
    Video { url: String, thumbnail: String },
}

fn is_displayable_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with('/')
        || url.starts_with("./")
        || url.starts_with("../")
}

/// Display sequence for a project's media: its images in order, then the
/// optional video as the trailing item.
#[derive(Debug)]
pub struct Carousel {
    items: Vec<CarouselItem>,
    current: usize,
    auto_playing: bool,
    video_open: bool,
}

impl Carousel {
    pub fn build(images: &[String], video_url: Option<&str>) -> Self {
        let mut items: Vec<CarouselItem> = images
            .iter()
            .filter(|url| is_displayable_url(url))
            .map(|url| CarouselItem::Image { url: url.clone() })
            .collect();

        if let Some(url) = video_url {
            if !url.is_empty() {
                items.push(CarouselItem::Video {
                    url: url.to_string(),
                    thumbnail: youtube::thumbnail_url(url),
                });
            }
        }

        Self {
            items,
            current: 0,
            auto_playing: false,
            video_open: false,
        }
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&CarouselItem> {
        self.items.get(self.current)
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    pub fn is_video_open(&self) -> bool {
        self.video_open
    }

    pub fn start_auto_play(&mut self) {
        if self.items.len() > 1 {
            self.auto_playing = true;
        }
    }

    /// Manual step forward; wraps at the end and pauses auto-advance.
    pub fn next(&mut self) {
        self.step_forward();
        self.auto_playing = false;
    }

    /// Manual step back; wraps at the start and pauses auto-advance.
    pub fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }

        self.current = if self.current == 0 {
            self.items.len() - 1
        } else {
            self.current - 1
        };
        self.video_open = false;
        self.auto_playing = false;
    }

    /// Direct jump from the thumbnail strip; out-of-range is ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.items.len() {
            self.current = index;
            self.video_open = false;
            self.auto_playing = false;
        }
    }

    /// Opening the inline player stops the timer so the video is not
    /// yanked away mid-playback.
    pub fn open_video(&mut self) {
        if matches!(self.current(), Some(CarouselItem::Video { .. })) {
            self.video_open = true;
            self.auto_playing = false;
        }
    }

    /// One timer tick: advances only while auto-playing.
    pub fn tick(&mut self) {
        if self.auto_playing {
            self.step_forward();
        }
    }

    fn step_forward(&mut self) {
        if self.items.is_empty() {
            return;
        }

        self.current = if self.current < self.items.len() - 1 {
            self.current + 1
        } else {
            0
        };
        self.video_open = false;
    }
}

/// Owns the auto-advance timer task; dropping the handle aborts the task,
/// so a torn-down view cannot leak a repeating timer.
pub struct AutoAdvance {
    handle: JoinHandle<()>,
}

impl AutoAdvance {
    pub fn spawn(carousel: Arc<Mutex<Carousel>>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(AUTO_ADVANCE_PERIOD);
            // The first tick of a tokio interval fires immediately
            interval.tick().await;

            loop {
                interval.tick().await;
                carousel.lock().await.tick();
            }
        });

        Self { handle }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (0..n)
            .map(|i| format!("https://cdn.example.com/{}.png", i))
            .collect()
    }

    #[test]
    fn test_build_filters_invalid_urls() {
        let carousel = Carousel::build(
            &[
                "https://cdn.example.com/ok.png".to_string(),
                "".to_string(),
                "not a url".to_string(),
                "/relative/ok.png".to_string(),
            ],
            None,
        );

        assert_eq!(carousel.len(), 2);
    }

    #[test]
    fn test_video_is_the_trailing_item() {
        let carousel = Carousel::build(&images(2), Some("https://youtu.be/dQw4w9WgXcQ"));

        assert_eq!(carousel.len(), 3);
        assert!(matches!(
            carousel.items().last(),
            Some(CarouselItem::Video { thumbnail, .. })
                if thumbnail.contains("dQw4w9WgXcQ")
        ));
    }

    #[test]
    fn test_next_wraps_back_to_start_after_full_cycle() {
        let mut carousel = Carousel::build(&images(4), None);

        for _ in 0..4 {
            carousel.next();
        }

        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_previous_from_start_wraps_to_last() {
        let mut carousel = Carousel::build(&images(3), None);

        carousel.previous();

        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_jump_to_ignores_out_of_range() {
        let mut carousel = Carousel::build(&images(2), None);

        carousel.jump_to(1);
        assert_eq!(carousel.current_index(), 1);

        carousel.jump_to(9);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_tick_advances_only_while_auto_playing() {
        let mut carousel = Carousel::build(&images(3), None);

        carousel.tick();
        assert_eq!(carousel.current_index(), 0);

        carousel.start_auto_play();
        carousel.tick();
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_manual_interaction_cancels_auto_play() {
        let mut carousel = Carousel::build(&images(3), None);
        carousel.start_auto_play();

        carousel.next();

        assert!(!carousel.is_auto_playing());
        carousel.tick();
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_opening_video_cancels_auto_play() {
        let mut carousel = Carousel::build(&images(1), Some("https://youtu.be/dQw4w9WgXcQ"));
        carousel.start_auto_play();
        carousel.jump_to(1);
        carousel.start_auto_play();

        carousel.open_video();

        assert!(carousel.is_video_open());
        assert!(!carousel.is_auto_playing());
    }

    #[test]
    fn test_single_item_never_auto_plays() {
        let mut carousel = Carousel::build(&images(1), None);

        carousel.start_auto_play();

        assert!(!carousel.is_auto_playing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_ticks_on_the_five_second_period() {
        let carousel = Arc::new(Mutex::new(Carousel::build(&images(3), None)));
        carousel.lock().await.start_auto_play();

        let advance = AutoAdvance::spawn(Arc::clone(&carousel));
        // Let the spawned task reach its first await
        tokio::task::yield_now().await;

        tokio::time::sleep(AUTO_ADVANCE_PERIOD + Duration::from_millis(10)).await;
        tokio::task::yield_now().await;

        assert_eq!(carousel.lock().await.current_index(), 1);
        drop(advance);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_the_handle_stops_the_timer() {
        let carousel = Arc::new(Mutex::new(Carousel::build(&images(3), None)));
        carousel.lock().await.start_auto_play();

        let advance = AutoAdvance::spawn(Arc::clone(&carousel));
        tokio::task::yield_now().await;
        drop(advance);

        tokio::time::sleep(AUTO_ADVANCE_PERIOD * 3).await;
        tokio::task::yield_now().await;

        assert_eq!(carousel.lock().await.current_index(), 0);
    }
}
