//! `layout`: stage scaling and widget placement report.

use owo_colors::{OwoColorize, Stream};

use super::LayoutArgs;
use crate::geometry::{Placement, Stage, overlapping_pairs};

/// Render the report printed by `layout`.
pub fn layout_report(args: &LayoutArgs) -> String {
    let mut stage = Stage::new(args.design, args.viewport, args.standard);
    stage.dev = args.dev;

    let mut lines = vec![
        format!("scale     {}", stage.scale()),
        format!("stage     {}", stage.wrapper_size()),
        format!("transform {}", stage.transform()),
    ];

    for (i, rect) in args.rects.iter().enumerate() {
        lines.push(format!("#{i}        {}", stage.style(&Placement::from(*rect))));
    }

    for (a, b) in overlapping_pairs(&args.rects) {
        lines.push(format!("{} #{a} overlaps #{b}", "overlap".if_supports_color(Stream::Stdout, |t| t.yellow())));
    }

    lines.join("\n")
}

pub fn run_layout(args: &LayoutArgs) {
    println!("{}", layout_report(args));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rect, ScaleStandard, Size};

    #[test]
    fn test_layout_report() {
        owo_colors::set_override(false);
        let args = LayoutArgs {
            design: Size::default(),
            viewport: Size::new(960.0, 540.0),
            standard: ScaleStandard::Contain,
            rects: vec![
                Rect::new(0.0, 0.0, 960.0, 540.0),
                Rect::new(480.0, 270.0, 960.0, 540.0),
                Rect::new(1440.0, 810.0, 480.0, 270.0),
            ],
            dev: false,
        };

        let report = layout_report(&args);
        assert!(report.contains("scale     0.5"));
        assert!(report.contains("stage     1920x1080"));
        assert!(report.contains("#0        position:absolute;width:50%;height:50%"));
        assert!(report.contains("#0 overlaps #1"));
        assert!(!report.contains("#1 overlaps #2"));
    }
}
