fn main() {
    hagicode_compose::app::cli::run();
}
