// bases/download_cli/src/output.rs
use download_primitives::DownloadRequest;

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_download_start(&self, request: &DownloadRequest) {
        if self.verbose {
            println!("Starting download from: {}", request.url);
            println!("Format selector: {}", request.selector());
        }
    }

    pub fn print_download_complete(&self) {
        println!("Download completed successfully!");
    }

    pub fn error_line(error: &color_eyre::Report) -> String {
        format!("Error: {}", error)
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        println!("{}", Self::error_line(error));

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {}", cause);
            });
        }
    }
}
