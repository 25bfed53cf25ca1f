fn main() {
    use cpp_call_explorer::cli::parse;
    let cli = parse();
    let code = cpp_call_explorer::app::run_cli(cli);
    if code != 0 {
        std::process::exit(code);
    }
}
