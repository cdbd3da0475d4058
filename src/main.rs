use gtk4::glib;

fn main() -> glib::ExitCode {
    env_logger::init();

    match eginfo::app::run() {
        Ok(code) => code,
        Err(err) => {
            log::error!("startup failed: {}", err);
            glib::ExitCode::FAILURE
        }
    }
}
