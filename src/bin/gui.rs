#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 위젯 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use tracing::{info, warn};
use unit_converter::{
    catalog::Catalog,
    config,
    engine::{self, FormatPolicy, ParsedInput},
    i18n::{self, keys},
    logging,
    sync::{self, Event, Field, Render, SyncOptions, WidgetState},
};

/// 데스크톱 단위 변환 위젯.
#[derive(Debug, Parser)]
#[command(name = "unit_converter", version)]
struct GuiCli {
    /// 언어 코드 (auto/ko/en)
    #[arg(short = 'L', long)]
    lang: Option<String>,
    /// 디버그 로그 출력
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), eframe::Error> {
    let cli = GuiCli::parse();
    logging::init(cli.verbose);

    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        warn!(error = %e, "Config load failed, using defaults");
        config::Config::default()
    });
    if let Some(lang_cli) = cli.lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([460.0, 420.0])
        .with_transparent(true);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Unit Converter",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    // 기본 라틴 글꼴 뒤에 두어 한글 등 빠진 글리프만 채운다.
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(font_name.clone());
    }
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폰트를 찾아 등록한다.
/// 1) assets/fonts/ 2) Windows 시스템 폰트 3) 흔한 Linux/macOS CJK 폰트 경로 순으로 찾는다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![
        "assets/fonts/malgun.ttf".to_string(),
        "assets/fonts/NotoSansKR-Regular.ttf".to_string(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc"] {
            candidates.push(fonts.join(cand).to_string_lossy().into_owned());
        }
    }
    candidates.extend(
        [
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        ]
        .map(String::from),
    );

    for cand in &candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes =
                fs::read(p).map_err(|e| format!("Failed to read font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            info!(path = %p.display(), "Loaded UI font");
            return Ok(());
        }
    }
    Err("Korean font not found; Hangul labels may not render.".into())
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    catalog: Catalog,
    options: SyncOptions,
    state: WidgetState,
    render: Render,
    // 설정
    show_settings: bool,
    lang_input: String,
    catalog_input: String,
    window_alpha: f32,
    always_on_top: bool,
    settings_status: Option<String>,
    show_all_units: bool,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        info!(lang = %lang_code, "GUI language resolved");
        let catalog = Catalog::load(config.custom_catalog.as_deref().map(Path::new));
        let options = config.sync_options();
        let (state, render) =
            sync::initial_state(&catalog, &options, config.default_category.as_deref());
        Self {
            lang_input: config.language.clone(),
            catalog_input: config.custom_catalog.clone().unwrap_or_default(),
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            always_on_top: config.always_on_top,
            config,
            tr,
            catalog,
            options,
            state,
            render,
            show_settings: false,
            settings_status: None,
            show_all_units: false,
        }
    }

    /// 이벤트를 코디네이터에 넘기고 결과로 상태를 교체한다.
    fn apply(&mut self, event: Event) {
        let state = std::mem::take(&mut self.state);
        let (state, render) = sync::dispatch(&self.catalog, &self.options, state, event);
        self.state = state;
        self.render = render;
    }

    fn ui_converter(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let mut pending: Vec<Event> = Vec::new();
        let mut from_buf = self.render.from_text.clone();
        let mut to_buf = self.render.to_text.clone();

        egui::Grid::new("conv_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label(tr.t(keys::LABEL_CATEGORY));
                let category_name = self
                    .render
                    .category_id
                    .as_deref()
                    .and_then(|id| self.catalog.find_category(id))
                    .map(|c| c.name.clone())
                    .unwrap_or_default();
                egui::ComboBox::from_id_source("category")
                    .selected_text(category_name)
                    .width(240.0)
                    .show_ui(ui, |ui| {
                        for opt in self.catalog.list_categories() {
                            let selected =
                                self.render.category_id.as_deref() == Some(opt.id.as_str());
                            if ui.selectable_label(selected, opt.name.as_str()).clicked() {
                                pending.push(Event::CategorySelected(opt.id.clone()));
                            }
                        }
                    });
                ui.end_row();

                ui.label(tr.t(keys::LABEL_CONVERSION));
                let conversions = self
                    .render
                    .category_id
                    .as_deref()
                    .map(|id| self.catalog.list_conversions(id))
                    .unwrap_or_default();
                let conversion_label = conversions
                    .iter()
                    .find(|c| self.render.conversion_id.as_deref() == Some(c.id.as_str()))
                    .map(|c| c.label.clone())
                    .unwrap_or_else(|| tr.t(keys::LABEL_PLACEHOLDER));
                egui::ComboBox::from_id_source("conversion")
                    .selected_text(conversion_label)
                    .width(240.0)
                    .show_ui(ui, |ui| {
                        for opt in &conversions {
                            let selected =
                                self.render.conversion_id.as_deref() == Some(opt.id.as_str());
                            if ui.selectable_label(selected, opt.label.as_str()).clicked() {
                                pending.push(Event::ConversionSelected(opt.id.clone()));
                            }
                        }
                    });
                ui.end_row();

                if !self.render.resolved {
                    ui.label(tr.t(keys::LABEL_PLACEHOLDER));
                    ui.end_row();
                    return;
                }

                for (field, label, unit, buf) in [
                    (
                        Field::From,
                        &self.render.from_label,
                        &self.render.from_unit,
                        &mut from_buf,
                    ),
                    (
                        Field::To,
                        &self.render.to_label,
                        &self.render.to_unit,
                        &mut to_buf,
                    ),
                ] {
                    ui.label(label.as_str());
                    ui.horizontal(|ui| {
                        let resp = ui.add(egui::TextEdit::singleline(&mut *buf).desired_width(180.0));
                        if resp.gained_focus() {
                            pending.push(Event::FieldFocused(field));
                        }
                        if resp.changed() {
                            pending.push(Event::FieldEdited {
                                field,
                                text: buf.clone(),
                            });
                        }
                        ui.label(unit.as_str());
                    });
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        let reverse = egui::Button::new(tr.t(keys::BUTTON_REVERSE)).selected(self.render.reversed);
        if ui.add_enabled(self.render.resolved, reverse).clicked() {
            pending.push(Event::ReverseToggled);
        }
        if !self.render.note.is_empty() {
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(format!("{}: {}", tr.t(keys::LABEL_NOTE), self.render.note))
                    .small(),
            );
        }

        for event in pending {
            self.apply(event);
        }

        ui.add_space(8.0);
        ui.checkbox(&mut self.show_all_units, tr.t(keys::LABEL_ALL_UNITS));
        if self.show_all_units {
            self.ui_all_units(ui);
        }
    }

    /// 구동 필드 값을 카테고리의 모든 단위로 환산한 표.
    fn ui_all_units(&self, ui: &mut egui::Ui) {
        let Some(context) = engine::resolve_context(&self.state.selection, &self.catalog) else {
            return;
        };
        let source = self.state.source;
        let unit = match source {
            Field::From => context.from_unit,
            Field::To => context.to_unit,
        };
        let ParsedInput::Value(value) = engine::parse_user_input(self.state.fields.get(source))
        else {
            return;
        };
        egui::Grid::new("all_units_grid")
            .num_columns(3)
            .striped(true)
            .show(ui, |ui| {
                for target in &context.category.units {
                    let converted = engine::convert_units(value, unit, target);
                    ui.label(target.name.as_str());
                    ui.monospace(engine::format_result(converted, self.options.format));
                    ui.label(target.symbol.as_str());
                    ui.end_row();
                }
            });
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let mut open = self.show_settings;
        let mut save = false;
        egui::Window::new(tr.t(keys::SETTINGS_HEADING).trim())
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(tr.t(keys::SETTINGS_LANGUAGE));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(self.lang_input.as_str())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.lang_input, "auto".into(), "auto");
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                        ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                    });
                ui.separator();
                ui.label(tr.t(keys::SETTINGS_FORMAT));
                ui.horizontal(|ui| {
                    ui.selectable_value(
                        &mut self.config.format,
                        FormatPolicy::Tiered,
                        tr.t(keys::SETTINGS_FORMAT_TIERED),
                    );
                    ui.selectable_value(
                        &mut self.config.format,
                        FormatPolicy::Scientific,
                        tr.t(keys::SETTINGS_FORMAT_SCIENTIFIC),
                    );
                });
                ui.separator();
                ui.label(tr.t(keys::SETTINGS_CUSTOM_CATALOG));
                ui.horizontal(|ui| {
                    ui.text_edit_singleline(&mut self.catalog_input);
                    if ui.button(tr.t(keys::SETTINGS_BROWSE)).clicked() {
                        if let Some(path) = FileDialog::new().add_filter("TOML", &["toml"]).pick_file()
                        {
                            self.catalog_input = path.display().to_string();
                        }
                    }
                });
                ui.label(egui::RichText::new(tr.t(keys::SETTINGS_RESTART_NOTE)).small());
                ui.separator();
                ui.add(
                    egui::Slider::new(&mut self.window_alpha, 0.3..=1.0)
                        .text(tr.t(keys::SETTINGS_OPACITY)),
                );
                ui.checkbox(&mut self.always_on_top, tr.t(keys::SETTINGS_ALWAYS_ON_TOP));
                ui.separator();
                if ui.button(tr.t(keys::SETTINGS_SAVE)).clicked() {
                    save = true;
                }
                if let Some(status) = &self.settings_status {
                    ui.label(status.as_str());
                }
            });
        self.show_settings = open;
        if save {
            self.save_settings();
        }
    }

    fn save_settings(&mut self) {
        self.config.language = self.lang_input.clone();
        self.config.window_alpha = self.window_alpha;
        self.config.always_on_top = self.always_on_top;
        let trimmed = self.catalog_input.trim();
        self.config.custom_catalog = (!trimmed.is_empty()).then(|| trimmed.to_string());

        let resolved = i18n::resolve_language(&self.config.language, None);
        self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.options = self.config.sync_options();
        self.apply(Event::Refresh);

        self.settings_status = Some(match self.config.save() {
            Ok(()) => self.tr.t(keys::SETTINGS_SAVED),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(if self.always_on_top {
            egui::WindowLevel::AlwaysOnTop
        } else {
            egui::WindowLevel::Normal
        }));

        // 투명도 적용
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        let tr = self.tr.clone();
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t(keys::APP_TITLE));
                ui.separator();
                if ui.button(tr.t(keys::SETTINGS_HEADING).trim()).clicked() {
                    self.show_settings = true;
                }
            });
        });

        egui::TopBottomPanel::bottom("bottom_bar").show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{}: {}",
                    tr.t(keys::LABEL_CONVERSION_COUNT),
                    self.catalog.conversion_count()
                ))
                .small(),
            );
        });

        if self.show_settings {
            self.ui_settings(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.ui_converter(ui);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_accepts_language_and_verbose() {
        let cli = GuiCli::try_parse_from(["unit_converter", "--lang=ko", "-v"]).expect("valid args");
        assert_eq!(cli.lang.as_deref(), Some("ko"));
        assert!(cli.verbose);
        let cli = GuiCli::try_parse_from(["unit_converter", "-L", "en"]).expect("valid args");
        assert_eq!(cli.lang.as_deref(), Some("en"));
        assert!(!cli.verbose);
    }

    #[test]
    fn starts_on_first_category_with_seed() {
        let app = GuiApp::new(config::Config::default());
        assert_eq!(app.render.category_id.as_deref(), Some("length"));
        assert_eq!(app.render.conversion_id.as_deref(), Some("meters-feet"));
        assert_eq!(app.render.from_text, "1");
        assert_eq!(app.render.to_text, "3.2808");
    }

    #[test]
    fn configured_default_category_is_used() {
        let cfg = config::Config {
            default_category: Some("temperature".into()),
            ..config::Config::default()
        };
        let app = GuiApp::new(cfg);
        assert_eq!(app.render.conversion_id.as_deref(), Some("celsius-fahrenheit"));
        assert_eq!(app.render.to_text, "33.8");
    }

    #[test]
    fn apply_routes_events_through_dispatch() {
        let mut app = GuiApp::new(config::Config::default());
        app.apply(Event::FieldEdited {
            field: Field::To,
            text: "10".into(),
        });
        assert_eq!(app.render.from_text, "3.048");
        app.apply(Event::ReverseToggled);
        assert!(app.render.reversed);
        assert_eq!(app.render.from_label, "Feet");
        assert_eq!(app.render.from_text, "10");
    }
}
