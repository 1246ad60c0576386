// File: crates/demo/src/main.rs
// Summary: Demo loads a panel spec CSV, tightens the layout, and writes before/after SVG outlines.

use anyhow::{Context, Result};
use fig_core::margins::figure_margins;
use fig_core::optimize::{column_slacks, row_slacks};
use fig_core::units::{pt, to_pt};
use fig_core::{
    optimize, Canvas, ColorbarLocation, ColorbarOptions, ColorbarRegistry, Edges, GridSlot,
    InsetMeasurer, MarginSpec, OptimizeOptions, PadSpec, PanelKind,
};
use std::path::{Path, PathBuf};

struct PanelSpec {
    label: String,
    row: usize,
    col: usize,
    insets: Edges<f64>,
    colorbar: Option<ColorbarLocation>,
}

fn main() -> Result<()> {
    // Accept a spec path from the CLI or fall back to a built-in layout
    let specs = match std::env::args().nth(1) {
        Some(raw) => {
            let path = Path::new(&raw);
            if !path.exists() {
                anyhow::bail!("file not found: {}", path.display());
            }
            println!("Using panel spec: {}", path.display());
            load_panel_csv(path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            println!("No spec given; using the built-in 2x3 layout");
            builtin_specs()
        }
    };
    println!("Loaded {} panels", specs.len());

    if specs.is_empty() {
        anyhow::bail!("no panels loaded - check headers/delimiter.");
    }

    let nrows = specs.iter().map(|s| s.row).max().unwrap_or(0) + 1;
    let ncols = specs.iter().map(|s| s.col).max().unwrap_or(0) + 1;
    println!("Grid: {nrows} x {ncols}");

    let mut canvas = Canvas::new(8.0, 6.0);
    let grid = canvas.add_grid(nrows, ncols);
    let mut registry = ColorbarRegistry::new();
    let mut measurer = InsetMeasurer::uniform(pt(4.0));

    for spec in &specs {
        let id = canvas
            .add_panel(spec.label.clone(), GridSlot::cell(grid, spec.row, spec.col))
            .with_context(|| format!("placing panel '{}'", spec.label))?;
        measurer = measurer.with_panel(id, spec.insets);
        if let Some(location) = spec.colorbar {
            registry.add_colorbar(&mut canvas, id, location, ColorbarOptions::default())?;
        }
    }

    let out_dir = PathBuf::from("target/out");
    std::fs::create_dir_all(&out_dir).ok();
    let before_path = out_dir.join("layout_before.svg");
    std::fs::write(&before_path, svg_outline(&canvas))?;
    println!("Wrote {}", before_path.display());

    let wslacks = column_slacks(&canvas, &registry, &measurer)?;
    let hslacks = row_slacks(&canvas, &registry, &measurer)?;
    println!("column slack before (pt): {:.1?}", as_points(&wslacks));
    println!("row slack before (pt):    {:.1?}", as_points(&hslacks));

    let shared = OptimizeOptions {
        margin_pads: MarginSpec::Uniform(pt(5.0)),
        col_pads: PadSpec::Uniform(pt(12.0)),
        row_pads: PadSpec::Uniform(pt(12.0)),
        ..OptimizeOptions::default()
    };

    // Fixed-width mode on a copy: canvas width held, panels rescaled to fit
    let mut fixed = canvas.clone();
    optimize(&mut fixed, &registry, &measurer, &shared)
        .context("optimizing layout (fixed width)")?;
    let (fw, fh) = fixed.size();
    println!("fixed-width mode would give {fw:.3} x {fh:.3} in");

    let options = OptimizeOptions { fix_width: false, ..shared };
    optimize(&mut canvas, &registry, &measurer, &options).context("optimizing layout")?;

    let (w, h) = canvas.size();
    println!("canvas after: {w:.3} x {h:.3} in");
    let wslacks = column_slacks(&canvas, &registry, &measurer)?;
    let hslacks = row_slacks(&canvas, &registry, &measurer)?;
    println!("column slack after (pt): {:.1?}", as_points(&wslacks));
    println!("row slack after (pt):    {:.1?}", as_points(&hslacks));

    for panel in canvas.panels() {
        let core = panel.frac().to_physical(w, h);
        println!(
            "{:>16}  x [{:.3}, {:.3}]  y [{:.3}, {:.3}]",
            panel.label(),
            core.x0,
            core.x1,
            core.y0,
            core.y1,
        );
    }

    let margins = figure_margins(&canvas)?;
    println!("left margin per row (in): {:.3?}", margins.left);

    let after_path = out_dir.join("layout_after.svg");
    std::fs::write(&after_path, svg_outline(&canvas))?;
    println!("Wrote {}", after_path.display());

    Ok(())
}

/// Built-in fallback: two rows by three columns, outer columns carrying
/// tick labels, the bottom row axis titles, one colorbar top right.
fn builtin_specs() -> Vec<PanelSpec> {
    let mut specs = Vec::new();
    for row in 0..2 {
        for col in 0..3 {
            let insets = Edges::new(
                if col == 0 { pt(30.0) } else { pt(8.0) },
                pt(6.0),
                pt(10.0),
                if row == 1 { pt(26.0) } else { pt(8.0) },
            );
            specs.push(PanelSpec {
                label: format!("panel{row}{col}"),
                row,
                col,
                insets,
                colorbar: (row == 0 && col == 2).then_some(ColorbarLocation::Right),
            });
        }
    }
    specs
}

/// Load a panel spec CSV. Needs `row` and `col` columns; `label`,
/// per-edge decoration depths in points (`left_pt` .. `bottom_pt`) and a
/// `colorbar` side (left/right/top/bottom) are optional.
fn load_panel_csv(path: &Path) -> Result<Vec<PanelSpec>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_label = idx(&["label", "name", "panel"]);
    let i_row = idx(&["row", "r"]);
    let i_col = idx(&["col", "column"]);
    let i_left = idx(&["left_pt", "left"]);
    let i_right = idx(&["right_pt", "right"]);
    let i_top = idx(&["top_pt", "top"]);
    let i_bottom = idx(&["bottom_pt", "bottom"]);
    let i_cbar = idx(&["colorbar", "cbar"]);

    let (i_row, i_col) = match (i_row, i_col) {
        (Some(r), Some(c)) => (r, c),
        _ => anyhow::bail!("spec needs row and col columns"),
    };

    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let depth = |i: Option<usize>, fallback: f64| -> f64 {
            field(&rec, i)
                .and_then(|s| s.parse::<f64>().ok())
                .map(pt)
                .unwrap_or(fallback)
        };

        let (row, col) = match (
            field(&rec, Some(i_row)).and_then(|s| s.parse::<usize>().ok()),
            field(&rec, Some(i_col)).and_then(|s| s.parse::<usize>().ok()),
        ) {
            (Some(r), Some(c)) => (r, c),
            _ => {
                println!("Warning: record {line}: bad row/col, skipped");
                continue;
            }
        };

        let label = field(&rec, i_label)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("panel{row}{col}"));

        let colorbar = match field(&rec, i_cbar).map(str::to_lowercase).as_deref() {
            None | Some("") => None,
            Some("left") => Some(ColorbarLocation::Left),
            Some("right") => Some(ColorbarLocation::Right),
            Some("top") => Some(ColorbarLocation::Top),
            Some("bottom") => Some(ColorbarLocation::Bottom),
            Some(other) => {
                println!("Warning: record {line}: unknown colorbar side '{other}', ignored");
                None
            }
        };

        out.push(PanelSpec {
            label,
            row,
            col,
            insets: Edges::new(
                depth(i_left, pt(28.0)),
                depth(i_right, pt(6.0)),
                depth(i_top, pt(6.0)),
                depth(i_bottom, pt(22.0)),
            ),
            colorbar,
        });
    }
    Ok(out)
}

fn field<'r>(rec: &'r csv::StringRecord, i: Option<usize>) -> Option<&'r str> {
    i.and_then(|ix| rec.get(ix)).map(str::trim)
}

fn as_points(values: &[f64]) -> Vec<f64> {
    values.iter().map(|v| to_pt(*v)).collect()
}

/// Outline every panel of `canvas` as an SVG rect; colorbars dashed.
/// SVG's y axis runs downward, so boxes are flipped against the height.
fn svg_outline(canvas: &Canvas) -> String {
    let (w, h) = canvas.size();
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}in\" height=\"{h}in\" viewBox=\"0 0 {w} {h}\">\n"
    );
    for panel in canvas.panels() {
        let core = panel.frac().to_physical(w, h);
        let dash = match panel.kind() {
            PanelKind::Colorbar => " stroke-dasharray=\"0.05,0.05\"",
            PanelKind::Plot => "",
        };
        svg.push_str(&format!(
            "  <rect x=\"{:.4}\" y=\"{:.4}\" width=\"{:.4}\" height=\"{:.4}\" fill=\"none\" stroke=\"black\" stroke-width=\"0.02\"{}/>\n",
            core.x0,
            h - core.y1,
            core.width(),
            core.height(),
            dash,
        ));
    }
    svg.push_str("</svg>\n");
    svg
}
