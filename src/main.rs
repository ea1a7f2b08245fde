fn main() {
    idds_env::cmd::run();
}
