use std::{future::Future, path::Path, time::Duration};

use async_trait::async_trait;
use colored::Colorize;
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};
use transloadit_lib::{
    upload::{Assembly, UploadRequest},
    Error,
};

#[async_trait]
pub trait InteractiveUI {
    async fn show_loading<T>(&self, message: String, task: T) -> T::Output
    where
        T: Future + Send + 'static,
        T::Output: Send + 'static;

    fn print_request(&self, path: &Path, request: &UploadRequest);

    fn print_assembly(&self, assembly: &Assembly);

    fn print_error(&self, error: &Error);
}

#[derive(Clone, Default)]
pub struct PromptUI;

#[async_trait]
impl InteractiveUI for PromptUI {
    async fn show_loading<T>(&self, message: String, task: T) -> T::Output
    where
        T: Future + Send + 'static,
        T::Output: Send + 'static,
    {
        let pb = ProgressBar::new_spinner();
        pb.set_message(message);
        pb.set_style(ProgressStyle::default_spinner());
        let l = pb.clone();
        let timer = tokio::spawn(async move {
            loop {
                l.inc(1);
                tokio::time::sleep(Duration::from_millis(64)).await;
            }
        });
        let output = task.await;
        pb.finish_and_clear();
        timer.abort();
        output
    }

    fn print_request(&self, path: &Path, request: &UploadRequest) {
        let file_type = mime_guess::from_path(path).first_or_octet_stream().to_string();
        let file_size = humansize::format_size(request.size(), humansize::DECIMAL);

        let mut table = Table::new();
        table.set_header(vec!["Name", "Type", "Size", "Template"]);
        table.add_row(vec![
            &request.file_name,
            &file_type,
            &file_size,
            &request.template_id,
        ]);
        println!("{}", table);

        if !request.fields.is_empty() {
            let mut table = Table::new();
            table.set_header(vec!["Field", "Value"]);
            for (name, value) in &request.fields {
                table.add_row(vec![name, value]);
            }
            println!("{}", table);
        }
    }

    fn print_assembly(&self, assembly: &Assembly) {
        let mut steps = match assembly.result_steps() {
            Some(steps) => steps,
            None => {
                println!(
                    "{}",
                    "Upload finished with no parseable response".bold().yellow()
                );
                return;
            }
        };
        steps.sort();

        let mut table = Table::new();
        table.set_header(vec!["Step", "Result"]);
        for step in steps {
            let summary = match assembly.step_result(step) {
                Some(value) => value["ssl_url"]
                    .as_str()
                    .or(value["url"].as_str())
                    .map(str::to_string)
                    .unwrap_or(value.to_string()),
                None => "-".to_string(),
            };
            table.add_row(vec![step.to_string(), summary]);
        }
        println!("{}", table);
    }

    fn print_error(&self, error: &Error) {
        println!("{}", error.to_string().bold().red());
    }
}
