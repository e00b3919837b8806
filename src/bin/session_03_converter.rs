use colored::Colorize;
use go_sessions::converter::convert_temperature;
use go_sessions::logging::init_tracing;

fn main() {
    init_tracing();

    let celsius = 25.0;
    let fahrenheit = 77.0;

    match convert_temperature(Some(celsius), "C") {
        Ok(result) => println!("{celsius:.2}°C is {result:.2}°F"),
        Err(err) => println!("{} {err}", "Error:".red()),
    }

    match convert_temperature(Some(fahrenheit), "F") {
        Ok(result) => println!("{fahrenheit:.2}°F is {result:.2}°C"),
        Err(err) => println!("{} {err}", "Error:".red()),
    }

    for (value, unit) in [(Some(celsius), "K"), (None, "C")] {
        match convert_temperature(value, unit) {
            Ok(result) => println!("Result: {result:.2}"),
            Err(err) => println!("{} {err}", "Error:".red()),
        }
    }
}
