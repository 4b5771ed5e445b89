use starlines_cli::{command::triangle::run_triangle, setup_logger};

fn main() -> anyhow::Result<()> {
    let _guard = setup_logger();

    run_triangle()
}
