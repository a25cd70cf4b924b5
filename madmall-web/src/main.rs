use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match madmall_web::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("madmall-web: {}", e);
            ExitCode::FAILURE
        }
    }
}
