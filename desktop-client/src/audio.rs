use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use common::games::AudioSink;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

/// Loops one music file on the default output device.
pub struct RodioAudio {
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sink: Sink,
    track_path: PathBuf,
}

impl RodioAudio {
    pub fn open(track_path: &Path, volume: f32) -> Result<Self, String> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| format!("No audio output: {}", e))?;
        let sink = Sink::try_new(&handle).map_err(|e| format!("Failed to create sink: {}", e))?;
        sink.pause();
        sink.set_volume(volume);

        let audio = Self {
            _stream: stream,
            _handle: handle,
            sink,
            track_path: track_path.to_path_buf(),
        };
        audio.queue_track()?;
        Ok(audio)
    }

    fn queue_track(&self) -> Result<(), String> {
        let file = File::open(&self.track_path)
            .map_err(|e| format!("Failed to open {}: {}", self.track_path.display(), e))?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| format!("Failed to decode {}: {}", self.track_path.display(), e))?;
        self.sink.append(source.repeat_infinite());
        Ok(())
    }
}

impl AudioSink for RodioAudio {
    fn play(&mut self) -> Result<(), String> {
        if self.sink.empty() {
            self.queue_track()?;
        }
        self.sink.play();
        Ok(())
    }

    fn pause(&mut self) -> Result<(), String> {
        self.sink.pause();
        Ok(())
    }

    /// Drops the playing source and queues the track again from the start, paused.
    fn rewind(&mut self) -> Result<(), String> {
        self.sink.clear();
        self.sink.pause();
        self.queue_track()
    }
}
