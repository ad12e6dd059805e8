use dive_gas_blend::{
    BlendParameters,
    ead::{equivalent_air_depth, max_operating_depth, ppo2_at_depth},
    mix::{MixRequest, best_mix},
    table::mix_table,
};
use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

struct BestMixApp {
    // Blend inputs
    depth: f64,
    po2_ceiling: f64,
    trimix: bool,
    target_ead: f64,
    meters_per_atm: f64,

    // UI state
    show_o2: bool,
    show_he: bool,
    show_n2: bool,
}

impl Default for BestMixApp {
    fn default() -> Self {
        Self {
            depth: 30.0,
            po2_ceiling: 1.4,
            trimix: false,
            target_ead: 30.0,
            meters_per_atm: 10.0,
            show_o2: true,
            show_he: true,
            show_n2: true,
        }
    }
}

impl eframe::App for BestMixApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Left column - blend controls
                ui.vertical(|ui| {
                    ui.set_min_width(380.0);
                    ui.set_max_width(400.0);

                    ui.group(|ui| {
                        ui.set_min_width(360.0);
                        ui.spacing_mut().item_spacing.y = 8.0;
                        self.controls_panel(ui);
                    });
                });

                ui.separator();
                ui.add_space(16.0);

                // Right column - solved mix and fraction curves
                ui.vertical(|ui| {
                    ui.set_min_width(600.0);
                    ui.group(|ui| {
                        ui.spacing_mut().item_spacing.y = 8.0;
                        self.results_panel(ui);
                    });
                });
            });
        });
    }
}

impl BestMixApp {
    fn params(&self) -> BlendParameters {
        BlendParameters::new(self.meters_per_atm, 1.0)
    }

    fn request(&self) -> MixRequest {
        if self.trimix {
            MixRequest::trimix(self.depth, self.po2_ceiling, self.target_ead)
        } else {
            MixRequest::nitrox(self.depth, self.po2_ceiling)
        }
    }

    fn controls_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("🔧 Dive Plan");
        ui.add_space(8.0);

        egui::Grid::new("blend_controls_grid")
            .num_columns(2)
            .spacing([40.0, 8.0])
            .show(ui, |ui| {
                ui.label("Depth:");
                ui.add(egui::Slider::new(&mut self.depth, 0.0..=120.0).suffix(" m"));
                ui.end_row();

                ui.label("ppO2 Ceiling:");
                ui.add(egui::Slider::new(&mut self.po2_ceiling, 1.0..=1.6).suffix(" bar"));
                ui.end_row();

                ui.label("Meters per atm:");
                ui.add(
                    egui::DragValue::new(&mut self.meters_per_atm)
                        .speed(0.01)
                        .range(9.5..=10.5)
                        .suffix(" m"),
                );
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(4.0);

        ui.checkbox(&mut self.trimix, "🎈 Blend helium against a target EAD");
        if self.trimix {
            egui::Grid::new("trimix_grid")
                .num_columns(2)
                .spacing([40.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Target EAD:");
                    ui.add(egui::Slider::new(&mut self.target_ead, 0.0..=60.0).suffix(" m"));
                    ui.end_row();
                });
        }

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(4.0);

        ui.label("📈 Plot Fractions:");
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.show_o2, "O2");
            ui.checkbox(&mut self.show_he, "He");
            ui.checkbox(&mut self.show_n2, "N2");
        });
    }

    fn results_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("📊 Best Mix");
        ui.add_space(8.0);

        let params = self.params();
        // solved synchronously on every slider movement, no debounce needed
        let mix = match best_mix(params, self.request()) {
            Ok(mix) => mix,
            Err(e) => {
                ui.colored_label(egui::Color32::RED, format!("Cannot solve: {}", e));
                return;
            }
        };

        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::from_rgb(100, 150, 255), "Mix:");
            ui.heading(format!("{}", mix.label()));
        });

        egui::Grid::new("mix_results_grid")
            .num_columns(2)
            .spacing([20.0, 4.0])
            .striped(true)
            .show(ui, |ui| {
                ui.strong("Oxygen");
                ui.label(format!("{:.2}%", mix.fo2 * 100.0));
                ui.end_row();
                ui.strong("Helium");
                ui.label(format!("{:.2}%", mix.fhe * 100.0));
                ui.end_row();
                ui.strong("Nitrogen");
                ui.label(format!("{:.2}%", mix.fn2 * 100.0));
                ui.end_row();

                ui.strong("ppO2 at depth");
                ui.label(format!(
                    "{:.3} bar",
                    ppo2_at_depth(params, mix.fo2, self.depth)
                ));
                ui.end_row();
                ui.strong("EAD at depth");
                ui.label(format!(
                    "{:.1} m",
                    equivalent_air_depth(params, mix, self.depth)
                ));
                ui.end_row();
                if let Ok(mod_depth) = max_operating_depth(params, mix.fo2, self.po2_ceiling) {
                    ui.strong("MOD");
                    ui.label(format!("{:.1} m", mod_depth));
                    ui.end_row();
                }
            });

        ui.separator();
        self.fraction_plot(ui);
    }

    fn fraction_plot(&mut self, ui: &mut egui::Ui) {
        ui.label("Fractions over depth at the current ceiling");

        let params = self.params();
        let target_ead = if self.trimix {
            Some(self.target_ead)
        } else {
            None
        };
        let table = match mix_table(params, self.po2_ceiling, target_ead, 0.0, 120.0, 1.0) {
            Ok(table) => table,
            Err(_) => return,
        };

        let plot = Plot::new("fraction_plot")
            .height(300.0)
            .legend(egui_plot::Legend::default())
            .y_axis_label("Fraction (%)")
            .x_axis_label("Depth (m)")
            .include_y(0.0);

        plot.show(ui, |plot_ui| {
            if self.show_o2 {
                let points: PlotPoints = table
                    .depths
                    .iter()
                    .zip(table.mixes.iter())
                    .map(|(&depth, mix)| [depth, mix.fo2 * 100.0])
                    .collect();
                plot_ui.line(Line::new("O2", points).color(egui::Color32::BLUE).width(2.0));
            }

            if self.show_he {
                let points: PlotPoints = table
                    .depths
                    .iter()
                    .zip(table.mixes.iter())
                    .map(|(&depth, mix)| [depth, mix.fhe * 100.0])
                    .collect();
                plot_ui.line(
                    Line::new("He", points)
                        .color(egui::Color32::GOLD)
                        .width(2.0),
                );
            }

            if self.show_n2 {
                let points: PlotPoints = table
                    .depths
                    .iter()
                    .zip(table.mixes.iter())
                    .map(|(&depth, mix)| [depth, mix.fn2 * 100.0])
                    .collect();
                plot_ui.line(
                    Line::new("N2", points)
                        .color(egui::Color32::GREEN)
                        .width(1.5)
                        .style(egui_plot::LineStyle::Dashed { length: 5.0 }),
                );
            }
        });
    }
}

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Best-Mix Gas Planner",
        options,
        Box::new(|_cc| Ok(Box::new(BestMixApp::default()))),
    )
}
