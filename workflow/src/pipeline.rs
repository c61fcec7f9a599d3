use std::path::Path;

/// One executable in the pipeline with its arguments.
#[derive(Debug, Clone)]
struct Stage {
    executable: String,
    args: Vec<String>,
}

/// A DPL pipeline: executables sharing one configuration, joined with `|`.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Every executable gets `-b --configuration json://<config>`.
    pub fn new<'a, I>(executables: I, config: &Path) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let configuration = format!("json://{}", config.display());
        let stages = executables
            .into_iter()
            .map(|exe| Stage {
                executable: exe.clone(),
                args: vec![
                    "-b".to_owned(),
                    "--configuration".to_owned(),
                    configuration.clone(),
                ],
            })
            .collect();
        Self { stages }
    }

    /// Add `--<key> <value>` to the first (main) executable.
    pub fn main_option(&mut self, key: &str, value: &str) -> &mut Self {
        if let Some(main) = self.stages.first_mut() {
            main.args.push(format!("--{key}"));
            main.args.push(value.to_owned());
        }
        self
    }

    pub fn executables(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().map(|s| s.executable.as_str())
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Shell command line for the whole pipeline.
    pub fn command_line(&self) -> String {
        let mut out = String::with_capacity(64 * self.stages.len());
        for (i, stage) in self.stages.iter().enumerate() {
            if i > 0 {
                out.push_str(" | ");
            }
            out.push_str(&shell_quote(&stage.executable));
            for arg in &stage.args {
                out.push(' ');
                out.push_str(&shell_quote(arg));
            }
        }
        out
    }
}

fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:@=,+".contains(c));
    if plain {
        s.to_owned()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_command_line() {
        let exes = vec![
            "o2-analysis-dq-table-maker".to_owned(),
            "o2-analysis-timestamp".to_owned(),
        ];
        let mut pipeline = Pipeline::new(&exes, Path::new("out/tempConfig.json"));
        pipeline.main_option("aod-writer-json", "out/aodWriterTempConfig.json");
        assert_eq!(pipeline.len(), 2);
        assert_eq!(
            pipeline.command_line(),
            "o2-analysis-dq-table-maker -b --configuration json://out/tempConfig.json \
             --aod-writer-json out/aodWriterTempConfig.json \
             | o2-analysis-timestamp -b --configuration json://out/tempConfig.json"
        );
    }

    #[test]
    fn test_quoting() {
        assert_eq!(shell_quote("my dir/cfg.json"), "'my dir/cfg.json'");
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
        assert_eq!(shell_quote(""), "''");
    }
}
