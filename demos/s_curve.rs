// Copyright 2026 the Cubic Arclen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print equal-t and equal-s samples of an S-shaped cubic, with the arc
//! length between consecutive samples.
//!
//! Run with `RUST_LOG=debug` to see the editor's rebuild log.

use cubic_arclen::{CurveEditor, DisplayPoint, ParamCurve, ParamCurveArclen};

fn print_family(editor: &CurveEditor, name: &str, samples: &[DisplayPoint]) {
    let Some(curve) = editor.curve() else {
        return;
    };
    println!("{name}:");
    let mut prev_t = 0.0;
    for p in samples {
        let gap = curve.subsegment(prev_t..p.t).arclen(1e-9);
        println!(
            "  param {:.2}  t {:.4}  ({:7.2}, {:7.2})  gap {:6.2}",
            p.param, p.t, p.point.x, p.point.y, gap
        );
        prev_t = p.t;
    }
}

fn main() {
    env_logger::init();

    let mut editor = CurveEditor::new();
    println!("{}", editor.status_text());
    for p in [(0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0)] {
        if let Err(e) = editor.add_point(p.into()) {
            eprintln!("{e}");
            return;
        }
    }
    println!("{}", editor.status_text());
    println!("{}", editor.arc_length_text());

    editor.set_show_t(true);
    editor.set_show_s(true);
    let frame = editor.frame();
    if let Some(samples) = &frame.equal_t {
        print_family(&editor, "equal t", samples);
    }
    if let Some(samples) = &frame.equal_s {
        print_family(&editor, "equal s", samples);
    }
}
