use std::io::Read;

use clap::Parser;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_appender::non_blocking;
use time::macros::format_description;

use sha1::{Digest, HashFileError, Sha1, hash_file_with};

#[derive(Parser, Debug)]
#[command(name="hashium", version)]
struct Args {
    #[arg(short, long, help="Maximum accepted input size in bytes")]
    max_size: Option<usize>,

    #[arg(help="Files to hash; reads standard input when empty")]
    files: Vec<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let file_appender = tracing_appender::rolling::never("logs", "hashium.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    let timer = LocalTime::new(
        format_description!("[month]/[day]/[year] [hour repr:24]:[minute]:[second].[subsecond digits:4]"));
    tracing_subscriber::fmt().with_writer(non_blocking).with_ansi(false).with_timer(timer).init();

    let hasher = Sha1::with_max_input(args.max_size.unwrap_or(Sha1::DEFAULT_MAX_INPUT));

    if args.files.is_empty() {
        match hash_stdin(&hasher) {
            Ok(digest) => println!("{digest}  -"),
            Err(e) => println!("Unable to hash standard input: {e}"),
        }
    } else {
        let mut tasks = Vec::with_capacity(args.files.len());
        for filename in &args.files {
            let hasher_clone = hasher.clone();
            let filename_clone = filename.clone();
            tasks.push(tokio::spawn(async move {
                hash_file_with(&hasher_clone, &filename_clone)
            }));
        }
        for (filename, task) in args.files.iter().zip(tasks) {
            match task.await {
                Ok(Ok(digest)) => println!("{digest}  {filename}"),
                Ok(Err(e)) => println!("Unable to hash {filename}: {e}"),
                Err(e) => println!("Unable to hash {filename}: {e:?}"),
            }
        }
    }
}

fn hash_stdin(hasher: &Sha1) -> Result<Digest, HashFileError> {
    let mut bytes = Vec::new();
    std::io::stdin().lock().read_to_end(&mut bytes)?;
    let digest = hasher.digest(&bytes)?;
    Ok(digest)
}
