fn main() {
    devstack::app::cli::run();
}
