use colored::Colorize;
use go_sessions::library::{Book, Library};
use go_sessions::logging::init_tracing;

fn list_available(lib: &Library) {
    for book in lib.available_books() {
        println!("{}", book.info());
    }
}

fn main() {
    init_tracing();

    let mut lib = Library::new();
    lib.add_book(Book::new("1984", "George Orwell"));
    lib.add_book(Book::new("The Great Gatsby", "F. Scott Fitzgerald"));

    println!("{}", "Available books:".bold());
    list_available(&lib);

    println!("\nBorrowing '1984'...");
    if let Err(err) = lib.borrow_book("1984") {
        println!("{} {err}", "Error:".red());
    }

    println!("\n{}", "Available books after borrowing:".bold());
    list_available(&lib);

    println!("\nReturning '1984'...");
    if let Err(err) = lib.return_book("1984") {
        println!("{} {err}", "Error:".red());
    }

    println!("\n{}", "Available books after returning:".bold());
    list_available(&lib);
}
