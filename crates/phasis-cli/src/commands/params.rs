//! Parameter listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;
use phasis_core::{DEFAULT_SAMPLE_RATE, ParamDescriptor, ParamFlags, ParameterInfo};
use phasis_effects::StereoPhaser;

#[derive(Args)]
pub struct ParamsArgs {
    /// Show stable IDs alongside each parameter
    #[arg(long)]
    ids: bool,
}

fn format_value(desc: &ParamDescriptor, value: f32) -> String {
    let suffix = desc.unit.suffix();
    if desc.step >= 1.0 {
        format!("{:.0}{}", value, suffix)
    } else {
        format!("{:.2}{}", value, suffix)
    }
}

fn kind(desc: &ParamDescriptor) -> &'static str {
    if desc.flags.contains(ParamFlags::STEPPED) {
        "stepped"
    } else {
        "continuous"
    }
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    let phaser = StereoPhaser::new(DEFAULT_SAMPLE_RATE);

    println!("Phaser Parameters");
    println!("=================");
    println!();
    println!(
        "  {:14}  {:8}  {:20}  {:10}  {:10}",
        "Name", "Short", "Range", "Default", "Kind"
    );
    println!(
        "  {:14}  {:8}  {:20}  {:10}  {:10}",
        "----", "-----", "-----", "-------", "----"
    );

    for desc in (0..phaser.param_count()).filter_map(|i| phaser.param_info(i)) {
        let range = format!(
            "{} - {}",
            format_value(&desc, desc.min),
            format_value(&desc, desc.max)
        );
        print!(
            "  {:14}  {:8}  {:20}  {:10}  {:10}",
            desc.name,
            desc.short_name,
            range,
            format_value(&desc, desc.default),
            kind(&desc)
        );
        if args.ids {
            print!("  {:>4}  {}", desc.id.0, desc.string_id);
        }
        println!();
    }

    println!();
    println!("Set parameters with: phasis process in.wav out.wav --set mix=50% --set stages=8");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phasis_core::ParamUnit;

    #[test]
    fn stepped_values_have_no_decimals() {
        let desc = ParamDescriptor::mix();
        assert_eq!(format_value(&desc, 70.0), "70%");
    }

    #[test]
    fn kind_follows_stepped_flag() {
        let stages = ParamDescriptor::custom("Stages", "Stg", 1.0, 12.0, 6.0)
            .with_flags(ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED));
        assert_eq!(kind(&stages), "stepped");
        assert_eq!(kind(&ParamDescriptor::mix()), "continuous");
    }

    #[test]
    fn continuous_values_show_two_decimals() {
        let desc = ParamDescriptor::custom("Coeff Min", "CoefMin", 0.0, 0.99, 0.2);
        assert_eq!(format_value(&desc, 0.2), "0.20");

        let hz = desc.with_unit(ParamUnit::Hertz);
        assert_eq!(format_value(&hz, 0.35), format!("0.35{}", ParamUnit::Hertz.suffix()));
    }
}
