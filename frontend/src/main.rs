fn main() {
    fieldlog_frontend::start();
}
