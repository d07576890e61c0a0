use sharetree::config::{ColorMode, Config, SizeUnits};
use sharetree::presentation::ColorWhen;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::widgets::tree_menu::RenderStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub show_sizes: bool,
    pub units: SizeUnits,
    pub expand_depth: usize,
}

impl UiContext {
    pub fn new(
        json: bool,
        cli_color: Option<ColorWhen>,
        cli_depth: Option<usize>,
        config: &Config,
    ) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, cli_color, cli_depth, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        cli_depth: Option<usize>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) => caps.supports_color,
            None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color,
            },
        };

        Self {
            json,
            caps,
            color,
            unicode,
            show_sizes: config.browse.show_sizes,
            units: config.browse.size_units,
            expand_depth: cli_depth.unwrap_or(config.browse.expand_depth),
        }
    }

    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            unicode: self.unicode,
            color: self.color,
            show_sizes: self.show_sizes,
            units: self.units,
        }
    }
}
