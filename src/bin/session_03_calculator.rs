use colored::Colorize;
use go_sessions::calculator::perform_operation;
use go_sessions::logging::init_tracing;

fn report(label: &str, a: Option<f64>, b: Option<f64>, operator: &str) {
    match perform_operation(a, b, operator) {
        Ok(result) => println!("{label} Result: {result:.2}"),
        Err(err) => println!("{} {err}", "Error:".red()),
    }
}

fn main() {
    init_tracing();

    let (a, b) = (Some(10.0), Some(5.0));
    report("Addition", a, b, "+");
    report("Division", a, b, "/");
    report("Modulo", a, b, "%");
    report("Division", a, Some(0.0), "/");
    report("Addition", None, b, "+");
}
