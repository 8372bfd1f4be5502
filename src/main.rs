fn main() {
    aisys::app::cli::run();
}
