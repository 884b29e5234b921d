pub const EVENT_LOG_SIZE: usize = 8;
pub const WINDOW_PADDING_PX: f32 = 260.0;
pub const WINDOW_HEADER_PX: f32 = 140.0;
