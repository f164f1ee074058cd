use binmorph_core::pipeline::{Operation, PipelineConfig};
use binmorph_core::threshold::ThresholdMethod;
use console::Style;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_filter_summary(config: &PipelineConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Binmorph Filter"));
    println!(
        "  {}",
        s.title.apply_to(
            "\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"
        )
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Operation"),
        s.method.apply_to(&config.operation)
    );
    if config.operation == Operation::Close {
        let variant = if config.legacy_close {
            "erosion-first (legacy)"
        } else {
            "dilation-first"
        };
        println!("  {:<14}{}", s.label.apply_to("Closing"), s.value.apply_to(variant));
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Element"),
        s.value.apply_to(&config.element)
    );

    let threshold = match config.threshold.method {
        ThresholdMethod::Fixed(v) => format!("fixed {v}"),
        ThresholdMethod::Otsu => "otsu".to_string(),
        ThresholdMethod::MeanPlusSigma => {
            format!("mean + {:.1} x stddev", config.threshold.sigma_multiplier)
        }
    };
    println!(
        "  {:<14}{}",
        s.label.apply_to("Threshold"),
        s.value.apply_to(threshold)
    );
    println!();
}
