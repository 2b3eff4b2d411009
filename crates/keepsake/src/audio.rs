use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Result;
use rodio::{Decoder, OutputStream, Sink};

/// Playback status as confirmed by the audio engine, not merely requested.
/// Starting playback can fail (no output device, undecodable source), in
/// which case the state is `Blocked` and the UI invites a retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicState {
    Stopped,
    Playing,
    Blocked,
}

impl MusicState {
    /// The music toggle's displayed label.
    pub fn label(&self) -> &'static str {
        match self {
            MusicState::Stopped => "\u{266A} Play Music",
            MusicState::Playing => "\u{23F8} Pause Music",
            MusicState::Blocked => "\u{266A} Click to Play",
        }
    }
}

/// Background music playback behind the card's music toggle.
///
/// The output stream stays alive for the window's lifetime once playback
/// has started; toggling pauses and resumes the sink.
pub struct MusicPlayer {
    path: PathBuf,
    state: MusicState,
    playback: Option<(OutputStream, Sink)>,
}

impl MusicPlayer {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: MusicState::Stopped,
            playback: None,
        }
    }

    pub fn state(&self) -> MusicState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == MusicState::Playing
    }

    /// Flip playback. The state only becomes `Playing` after the engine
    /// confirms a start; a failed start degrades to `Blocked`.
    pub fn toggle(&mut self) -> MusicState {
        self.state = match self.state {
            MusicState::Playing => {
                if let Some((_, sink)) = &self.playback {
                    sink.pause();
                }
                MusicState::Stopped
            }
            MusicState::Stopped | MusicState::Blocked => match self.start() {
                Ok(()) => MusicState::Playing,
                Err(_) => MusicState::Blocked,
            },
        };
        self.state
    }

    fn start(&mut self) -> Result<()> {
        if let Some((_, sink)) = &self.playback {
            sink.play();
            return Ok(());
        }
        // Open and decode the source before touching the output device, so
        // a bad file reports Blocked without claiming audio hardware.
        let file = BufReader::new(File::open(&self.path)?);
        let source = Decoder::new_looped(file)?;
        let (stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        sink.append(source);
        sink.play();
        self.playback = Some((stream, sink));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_the_three_states() {
        assert_eq!(MusicState::Stopped.label(), "\u{266A} Play Music");
        assert_eq!(MusicState::Playing.label(), "\u{23F8} Pause Music");
        assert_eq!(MusicState::Blocked.label(), "\u{266A} Click to Play");
    }

    #[test]
    fn toggle_with_an_unreadable_source_reports_blocked() {
        let mut player = MusicPlayer::new(PathBuf::from("/nonexistent/song.mp3"));
        assert_eq!(player.toggle(), MusicState::Blocked);
        assert!(!player.is_playing());
        // Retrying keeps degrading gracefully instead of crashing.
        assert_eq!(player.toggle(), MusicState::Blocked);
    }
}
