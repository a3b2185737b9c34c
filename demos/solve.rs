use eqtrace::prelude::solve_lines;

fn main() {
    let mut args = std::env::args().skip(1);
    let method = args.next().unwrap_or_else(|| "elimination".to_string());
    let equations = ["3x + 2y = 7", "x - 2y = -3"];

    match solve_lines(&equations.join("\n"), &method) {
        Ok(lines) => println!("{}", lines.join("\n")),
        Err(err) => eprintln!("{err}"),
    }
}
