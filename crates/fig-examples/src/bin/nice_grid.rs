// File: crates/fig-examples/src/bin/nice_grid.rs
// Summary: Minimal example that tightens a 2x2 grid and prints the result.

use fig_core::margins::figure_margins;
use fig_core::{
    optimize, Canvas, ColorbarLocation, ColorbarOptions, ColorbarRegistry, Edges, InsetMeasurer,
    OptimizeOptions,
};

fn main() {
    let mut canvas = Canvas::new(6.4, 4.8);
    let (_grid, ids) = canvas.add_panel_grid(2, 2).expect("panel grid");

    let mut registry = ColorbarRegistry::new();
    registry
        .add_colorbar(&mut canvas, ids[1], ColorbarLocation::Right, ColorbarOptions::default())
        .expect("colorbar");

    // pretend every panel draws tick and axis labels 0.35 in deep on the
    // left and bottom, 0.1 in elsewhere
    let measurer = InsetMeasurer::new(Edges::new(0.35, 0.1, 0.1, 0.35));

    optimize(&mut canvas, &registry, &measurer, &OptimizeOptions::default()).expect("optimize");

    let (w, h) = canvas.size();
    println!("canvas: {w:.3} x {h:.3} in");
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

    let margins = figure_margins(&canvas).expect("margins");
    println!("left margin per row: {:?}", margins.left);
    println!("top margin per column: {:?}", margins.top);
}
