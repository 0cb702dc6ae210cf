fn main() {
    psdk_wizard::app::cli::run();
}
