use isomesh::log::{error, info, LevelFilter};
use isomesh::{Log, Settings};

fn main() {
    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("Settings from `{}` can't be loaded: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let log = if settings.debug {
        Log::default().with_target("isomesh", LevelFilter::Debug)
    } else {
        Log::default()
    };
    isomesh::log::subscribe(log);

    match isomesh::run(&settings) {
        Ok(report) => info!(
            "Done: {} cycles, up to {} triangles per cycle",
            report.cycles, report.max_triangles
        ),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
