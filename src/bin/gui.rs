// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use bowl_scrape::config::state::GuiState;
use bowl_scrape::gui;
use eframe::egui::{IconData, ViewportBuilder};

const ICON: u32 = 64;

/// Bowling ball: dark disc, three finger holes, soft highlight.
fn app_icon() -> IconData {
    let n = ICON as f32;
    let (cx, cy, r) = (n / 2.0, n / 2.0, n / 2.0 - 2.0);
    let holes = [(0.40, 0.32), (0.56, 0.30), (0.50, 0.46)];
    let hole_r = n * 0.06;

    let mut rgba = Vec::with_capacity((ICON * ICON * 4) as usize);
    for y in 0..ICON {
        for x in 0..ICON {
            let (fx, fy) = (x as f32 + 0.5, y as f32 + 0.5);
            let d = ((fx - cx).powi(2) + (fy - cy).powi(2)).sqrt();
            let px = if d > r {
                [0, 0, 0, 0]
            } else if holes
                .iter()
                .any(|&(hx, hy)| ((fx - hx * n).powi(2) + (fy - hy * n).powi(2)).sqrt() < hole_r)
            {
                [10, 10, 14, 255]
            } else {
                // brighter toward the upper-left
                let lx = ((fx - cx * 0.7).powi(2) + (fy - cy * 0.7).powi(2)).sqrt() / r;
                let shade = (1.0 - lx).clamp(0.0, 1.0);
                [
                    (40.0 + 60.0 * shade) as u8,
                    (30.0 + 40.0 * shade) as u8,
                    (120.0 + 110.0 * shade) as u8,
                    255,
                ]
            };
            rgba.extend_from_slice(&px);
        }
    }
    IconData { rgba, width: ICON, height: ICON }
}

fn main() {
    let gui = GuiState::default();
    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([gui.window_w as f32, gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
