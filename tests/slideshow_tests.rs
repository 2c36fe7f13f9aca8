mod common;

#[cfg(test)]
pub mod slideshow_tests {
    use std::time::Duration;

    use delight_school::content::home::HERO_BACKGROUNDS;
    use delight_school::slideshow::*;

    #[test]
    fn test_slideshow_starts_at_zero() {
        let slides = Slideshow::new(5);
        assert_eq!(slides.current(), 0);
        assert!(slides.is_current(0));
        assert!(!slides.is_current(1));
    }

    #[test]
    fn test_slideshow_advance_by_one_and_wraps() {
        let mut slides = Slideshow::new(3);
        let mut seen = Vec::new();
        for _ in 0..4 {
            slides.advance();
            seen.push(slides.current());
        }
        assert_eq!(seen, vec![1, 2, 0, 1]);
    }

    #[test]
    fn test_slideshow_returns_to_start_after_len_ticks() {
        let mut slides = Slideshow::new(HERO_BACKGROUNDS.len());
        for _ in 0..HERO_BACKGROUNDS.len() {
            assert!(slides.current() < slides.len());
            slides.advance();
        }
        assert_eq!(slides.current(), 0);
    }

    #[test]
    fn test_slideshow_empty_stays_put() {
        let mut slides = Slideshow::new(0);
        slides.advance();
        assert!(slides.is_empty());
        assert_eq!(slides.current(), 0);
        assert!(!slides.is_current(0));
    }

    #[test]
    fn test_slide_interval_is_five_seconds() {
        assert_eq!(SLIDE_INTERVAL, Duration::from_millis(5000));
    }
}
