// ui.rs - eframe host callbacks: render each frame, teardown on exit

use eframe::egui;
use egui::{Color32, Key, Pos2, Rect, Vec2};
use life::Grid;

use crate::app::{Command, LifeApp};

const BACKGROUND: Color32 = Color32::WHITE;
const LIVE: Color32 = Color32::BLACK;

/// Size of one cell when `grid` is stretched over `area`.
pub fn cell_size(area: Rect, grid: &Grid) -> Vec2 {
    Vec2::new(
        area.width() / grid.width() as f32,
        area.height() / grid.height() as f32,
    )
}

/// Screen rectangle of cell (x, y).
pub fn cell_rect(area: Rect, size: Vec2, x: usize, y: usize) -> Rect {
    let min = area.min + Vec2::new(x as f32 * size.x, y as f32 * size.y);
    Rect::from_min_size(min, size)
}

/// The cell under `pos`, if it lies inside `area`.
pub fn cell_at(area: Rect, grid: &Grid, pos: Pos2) -> Option<(usize, usize)> {
    if !area.contains(pos) {
        return None;
    }
    let size = cell_size(area, grid);
    let offset = pos - area.min;
    let x = ((offset.x / size.x) as usize).min(grid.width() - 1);
    let y = ((offset.y / size.y) as usize).min(grid.height() - 1);
    Some((x, y))
}

fn read_commands(input: &egui::InputState) -> Vec<Command> {
    let bindings = [
        (Key::Space, Command::TogglePause),
        (Key::N, Command::StepOnce),
        (Key::R, Command::Reseed),
        (Key::C, Command::Clear),
        (Key::P, Command::ApplyPattern),
    ];
    bindings
        .into_iter()
        .filter(|&(key, _)| input.key_pressed(key))
        .map(|(_, command)| command)
        .collect()
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (dt, commands) = ctx.input(|i| (i.unstable_dt, read_commands(i)));
        self.frame(dt, &commands);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let area = ui.max_rect();
                let response = ui.allocate_rect(area, egui::Sense::click());
                if response.clicked() {
                    let cell = response
                        .interact_pointer_pos()
                        .and_then(|pos| cell_at(area, self.simulation().grid(), pos));
                    if let Some((x, y)) = cell {
                        self.toggle_cell(x, y);
                    }
                }

                let grid = self.simulation().grid();
                let size = cell_size(area, grid);
                let painter = ui.painter();

                // Only live cells are drawn; the panel fill is the dead color
                for (x, y) in grid.live_cells() {
                    painter.rect_filled(cell_rect(area, size, x, y), 0.0, LIVE);
                }
            });

        // Keep frames coming even without input
        ctx.request_repaint();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.teardown();
    }
}
