/// Background music controls. Failures are reported, never fatal to the game.
pub trait AudioSink {
    fn play(&mut self) -> Result<(), String>;
    fn pause(&mut self) -> Result<(), String>;
    fn rewind(&mut self) -> Result<(), String>;
}

pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn pause(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn rewind(&mut self) -> Result<(), String> {
        Ok(())
    }
}
