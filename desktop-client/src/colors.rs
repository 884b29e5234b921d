use common::games::snake::Rgb;
use eframe::egui;

pub const BACKGROUND: egui::Color32 = egui::Color32::BLACK;

pub fn to_color32(rgb: Rgb) -> egui::Color32 {
    let Rgb(r, g, b) = rgb;
    egui::Color32::from_rgb(r, g, b)
}
