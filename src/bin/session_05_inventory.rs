use colored::Colorize;
use go_sessions::inventory::{
    apply_discount, describe, index_by_id, item_names, list_by_id, list_items, sample_inventory,
};
use go_sessions::logging::init_tracing;
use go_sessions::output::{Output, Stdout};

fn main() {
    init_tracing();
    let out = Stdout;

    let items = sample_inventory();

    println!("{}", "Inventory (Array):".bold());
    for line in list_items(&items) {
        out.line(line);
    }
    println!();

    println!("Item Names: {:?}\n", item_names(&items));

    out.line(describe("Hello, World!"));
    out.line(describe(&12345));
    out.line(describe(&2.5f64));
    out.line(describe(&items[0]));
    println!();

    let by_id = index_by_id(items);
    println!("{}", "Inventory (Map):".bold());
    for line in list_by_id(&by_id) {
        out.line(line);
    }
    println!();

    for item in by_id.into_values() {
        apply_discount(item, 10.0, &out);
    }
}
