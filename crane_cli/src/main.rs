//! # Crane Bridge CLI
//!
//! Terminal front-end for the bridge beam calculator. Prompts for the
//! beam family, geometry and loads, prints the check report and dumps
//! the full result as JSON for downstream tooling.

use std::io::{self, BufRead, Write};

use crane_core::calculations::{
    calculate_beam_properties, calculate_double_beam_properties, calculate_v_beam_properties,
    check_end_carriage, generate_diagram_data, BeamInputs, BeamType, CalculationResults,
    DoubleBeamInputs, VBeamInputs,
};
use crane_core::materials::{Material, SteelGrade};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_str(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn prompt_beam_type() -> BeamType {
    println!("Beam family:");
    println!("  1. Single girder (welded box)");
    println!("  2. Rolled I-beam");
    println!("  3. Double girder");
    println!("  4. V-beam");
    let choice = prompt_f64("Select [1]: ", 1.0);
    match choice as i64 {
        2 => BeamType::IBeam,
        3 => BeamType::DoubleGirder,
        4 => BeamType::VBeam,
        _ => BeamType::SingleGirder,
    }
}

fn prompt_material() -> Material {
    let name = prompt_str("Steel grade (SS400/CT3/A36) [SS400]: ", "SS400");
    match Material::grade_by_name(&name) {
        Ok(material) => material,
        Err(e) => {
            eprintln!("Warning: {}. Using SS400.", e);
            Material::Grade {
                grade: SteelGrade::Ss400,
            }
        }
    }
}

fn prompt_beam_inputs(beam_type: BeamType) -> BeamInputs {
    let mut inputs = BeamInputs {
        bottom_flange_width_mm: prompt_f64("Bottom flange width (mm) [600]: ", 600.0),
        total_height_mm: prompt_f64("Total section height (mm) [900]: ", 900.0),
        bottom_flange_thickness_mm: prompt_f64("Bottom flange thickness (mm) [30]: ", 30.0),
        top_flange_thickness_mm: prompt_f64("Top flange thickness (mm) [30]: ", 30.0),
        web_thickness_mm: prompt_f64("Web thickness (mm) [15]: ", 15.0),
        web_spacing_mm: 0.0,
        top_flange_width_mm: 0.0,
        span_cm: prompt_f64("Bridge span (cm) [800]: ", 800.0),
        wheel_base_cm: prompt_f64("End carriage wheel base (cm) [160]: ", 160.0),
        end_taper_cm: prompt_f64("End carriage taper (cm) [40]: ", 40.0),
        hoist_load_kg: prompt_f64("Hoist capacity (kg) [15000]: ", 15_000.0),
        trolley_load_kg: prompt_f64("Trolley weight (kg) [5000]: ", 5_000.0),
        material: prompt_material(),
    };

    if beam_type != BeamType::VBeam {
        inputs.top_flange_width_mm = prompt_f64("Top flange width (mm) [600]: ", 600.0);
    }
    if beam_type != BeamType::IBeam && beam_type != BeamType::VBeam {
        inputs.web_spacing_mm = prompt_f64("Clear web spacing (mm) [400]: ", 400.0);
    }

    inputs
}

fn main() {
    env_logger::init();

    println!("Crane Bridge Calculator");
    println!("=======================");
    println!();

    let beam_type = prompt_beam_type();
    println!();
    let inputs = prompt_beam_inputs(beam_type);
    println!();

    let results = match beam_type {
        BeamType::SingleGirder | BeamType::IBeam => {
            if let Err(e) = inputs.validate() {
                report_error(&e);
                return;
            }
            calculate_beam_properties(&inputs, beam_type)
        }
        BeamType::DoubleGirder => {
            let double = DoubleBeamInputs {
                girder_spacing_cm: prompt_f64("Girder center spacing (cm) [120]: ", 120.0),
                transversal_load_kgm: prompt_f64("Cross member load (kg/m) [0]: ", 0.0),
                beam: inputs.clone(),
            };
            if let Err(e) = double.validate() {
                report_error(&e);
                return;
            }
            calculate_double_beam_properties(&double)
        }
        BeamType::VBeam => {
            let v = VBeamInputs {
                central_web_height_mm: prompt_f64("Central web height (mm) [340]: ", 340.0),
                inclined_web_length_mm: prompt_f64("Inclined web length (mm) [400]: ", 400.0),
                roof_thickness_mm: prompt_f64("Roof plate thickness (mm) [6]: ", 6.0),
                beam: inputs.clone(),
            };
            if let Err(e) = v.validate() {
                report_error(&e);
                return;
            }
            calculate_v_beam_properties(&v)
        }
    };

    print_report(&inputs, &results);
}

fn print_report(inputs: &BeamInputs, results: &CalculationResults) {
    println!("═══════════════════════════════════════");
    println!("  BRIDGE BEAM CALCULATION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Family:   {}", results.beam_type.display_name());
    println!("  Span:     {:.0} cm", inputs.span_cm);
    println!(
        "  Load:     {:.0} kg (hoist {:.0} + trolley {:.0})",
        inputs.point_load_kg(),
        inputs.hoist_load_kg,
        inputs.trolley_load_kg
    );
    println!("  Material: {}", inputs.material.display_name());
    println!();
    println!("Section Properties:");
    println!("  F  = {:>12.1} cm²", results.section.area_cm2);
    println!("  Yc = {:>12.2} cm", results.section.centroid_y_cm);
    println!("  Jx = {:>12.0} cm⁴", results.section.jx_cm4);
    println!("  Wx = {:>12.1} cm³", results.section.wx_cm3);
    println!("  Jy = {:>12.0} cm⁴", results.section.jy_cm4);
    println!("  Wy = {:>12.1} cm³", results.section.wy_cm3);
    println!();
    println!("Design Moments:");
    println!("  q   = {:>10.2} kg/cm (self weight)", results.loads.distributed_load_kgcm);
    println!("  M_x = {:>10.0} kg·cm", results.loads.moment_x_kgcm);
    println!("  M_y = {:>10.0} kg·cm", results.loads.moment_y_kgcm);
    println!();
    println!("Checks:");
    println!(
        "  Stress:     σ = {:>8.1} kg/cm², K = {:.2} {}",
        results.stress.combined_kgcm2,
        results.stress_check.factor,
        status_icon(results.stress_check.is_pass())
    );
    println!(
        "  Deflection: f = {:>8.3} cm (allow {:.3}), n = {:.2} {}",
        results.deflection.actual_cm,
        results.deflection.allowable_cm,
        results.deflection_check.factor,
        status_icon(results.deflection_check.is_pass())
    );
    println!(
        "  Buckling:   factor = {:.2} {}",
        results.buckling_check.factor,
        status_icon(results.buckling_check.is_pass())
    );
    println!();

    if results.stiffener.required {
        println!("Web Stiffeners:");
        println!("  Spacing:  {:.0} mm", results.stiffener.spacing_mm);
        println!("  Count:    {}", results.stiffener.count);
        println!(
            "  Plate:    {:.0} x {:.0} mm",
            results.stiffener.plate_width_mm, results.stiffener.plate_thickness_mm
        );
        println!("  Weight:   {:.1} kg", results.stiffener.total_weight_kg);
    } else {
        println!("Web Stiffeners: not required");
    }
    println!();

    let advisory = check_end_carriage(inputs.span_cm, inputs.wheel_base_cm, inputs.end_taper_cm);
    if advisory.balanced {
        println!(
            "End Carriage: balanced (wheel base {:.2} of span)",
            advisory.wheel_base_ratio
        );
    } else {
        println!("End Carriage:");
        for message in &advisory.messages {
            println!("  - {}", message);
        }
    }

    let diagram = generate_diagram_data(inputs.span_cm, &results.loads);
    println!(
        "Envelope: V_max = {:.0} kg, M_max = {:.0} kg·cm",
        diagram.max_shear_kg, diagram.max_moment_kgcm
    );
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  RESULT: {}",
        if results.passes() { "PASS" } else { "FAIL" }
    );
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(results) {
        println!("{}", json);
    }
}

fn report_error(e: &crane_core::CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[FAIL]"
    }
}
