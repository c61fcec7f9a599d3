use std::fs::File;
use std::io::{stderr, stdout, Read, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

use anyhow::{Context, Result};
use colored::Colorize;

use super::Error;
use crate::fs::Fs;

/// Run a subprocess, copying stdout and stderr to the terminal and to `log_path`.
/// Based on:
/// <https://stackoverflow.com/questions/66060139/how-to-tee-stdout-stderr-from-a-subprocess-in-rust>
pub fn run_cmd(cmd: &mut Command, log_path: &Path, fs: &Fs, verbose: bool) -> Result<ExitStatus> {
    if verbose {
        eprintln!("{} {:?}", "Creating log file".magenta(), log_path);
    }

    let out_file = fs.create_file(log_path).context("creating pipeline log file")?;
    let err_file = out_file.try_clone().context("sharing pipeline log file")?;

    if verbose {
        eprintln!("{}", "Running command...".magenta());
    }
    let mut child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| Error::SpawnFailed(format!("{:?}", cmd.get_program())))?;

    let child_out = child.stdout.take().ok_or(Error::NoChildPipe("stdout"))?;
    let child_err = child.stderr.take().ok_or(Error::NoChildPipe("stderr"))?;

    let thread_out = thread::spawn(move || communicate(child_out, out_file, stdout()));
    let thread_err = thread::spawn(move || communicate(child_err, err_file, stderr()));

    thread_out
        .join()
        .map_err(|_| Error::TeeThreadPanicked("stdout"))?
        .context("copying child stdout")?;
    thread_err
        .join()
        .map_err(|_| Error::TeeThreadPanicked("stderr"))?
        .context("copying child stderr")?;

    let status = child.wait().context("waiting on child process")?;

    if verbose {
        eprintln!("\n{} with {status}.", "Process finished".green());
    }
    Ok(status)
}

fn communicate<R: Read, W: Write>(
    mut stream: R,
    mut file: File,
    mut output: W,
) -> std::io::Result<()> {
    let mut buf = [0u8; 1024];
    loop {
        let num_read = stream.read(&mut buf)?;
        if num_read == 0 {
            break;
        }

        let buf = &buf[..num_read];
        file.write_all(buf)?;
        output.write_all(buf)?;
    }

    Ok(())
}
