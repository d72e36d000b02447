fn main() -> std::process::ExitCode {
    photoset_lib::run()
}
