// Facade: one call drives the TV, sound system and DVD player.

mod devices {
    pub struct Tv;
    impl Tv {
        pub fn turn_on(&self) -> String {
            "TV is on".to_string()
        }

        pub fn turn_off(&self) -> String {
            "TV is off".to_string()
        }
    }

    pub struct SoundSystem;
    impl SoundSystem {
        pub fn turn_on(&self) -> String {
            "Sound system is on".to_string()
        }

        pub fn set_volume(&self, level: u8) -> String {
            format!("Volume set to {}", level)
        }
    }

    pub struct DvdPlayer;
    impl DvdPlayer {
        pub fn play(&self) -> String {
            "DVD is playing".to_string()
        }
    }
}

pub use devices::{DvdPlayer, SoundSystem, Tv};

const MOVIE_VOLUME: u8 = 5;

pub struct HomeTheater {
    tv: Tv,
    sound: SoundSystem,
    dvd: DvdPlayer,
}

impl HomeTheater {
    pub fn new() -> Self {
        Self {
            tv: Tv,
            sound: SoundSystem,
            dvd: DvdPlayer,
        }
    }

    pub fn watch_movie(&self) -> Vec<String> {
        vec![
            "Getting ready to watch movie...".to_string(),
            self.tv.turn_on(),
            self.sound.turn_on(),
            self.sound.set_volume(MOVIE_VOLUME),
            self.dvd.play(),
        ]
    }

    pub fn end_movie(&self) -> Vec<String> {
        vec![
            "Shutting movie theater down...".to_string(),
            self.tv.turn_off(),
        ]
    }
}

impl Default for HomeTheater {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo() -> Vec<String> {
    HomeTheater::new().watch_movie()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_movie_sequence() {
        assert_eq!(
            HomeTheater::new().watch_movie(),
            vec![
                "Getting ready to watch movie...",
                "TV is on",
                "Sound system is on",
                "Volume set to 5",
                "DVD is playing",
            ]
        );
    }

    #[test]
    fn test_end_movie() {
        assert_eq!(
            HomeTheater::default().end_movie(),
            vec!["Shutting movie theater down...", "TV is off"]
        );
    }

    #[test]
    fn test_subsystems_usable_directly() {
        assert_eq!(SoundSystem.set_volume(11), "Volume set to 11");
    }
}
