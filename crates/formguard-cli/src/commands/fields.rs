use colored::Colorize;
use formguard::fields::FIELD_NAMES;

pub fn execute() {
    println!("{}", "Available fields:".green().bold());
    for name in FIELD_NAMES {
        println!("  {}", name.cyan());
    }
    println!();
    println!("Address values are written as street|city|state|country|postal_code");
}
