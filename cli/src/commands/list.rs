use colored::*;
use keygr_core::list_algorithms;

use crate::terminal::{colors, format, print};

pub fn list() {
    let algorithms = list_algorithms();
    for (idx, descriptor) in algorithms.iter().enumerate() {
        print::algorithm_entry(
            idx + 1,
            descriptor.name(),
            &[
                ("kgname", descriptor.id().color(colors::ACCENT)),
                ("needs", format::rule_inputs(descriptor.rule()).color(colors::TEXT_DEFAULT)),
            ],
        );
    }
    print::footer(&format!("{} supported router families", algorithms.len()));
}
