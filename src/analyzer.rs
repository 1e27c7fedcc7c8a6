use std::{
    io::{self, Write},
    path::PathBuf,
    process::{Command, Stdio},
    thread,
};

use encoding_rs::{Encoding, UTF_8};

use crate::{error::AnalyzerError, mecab_output::sentence::MecabSentence};

// sh が返すコマンドが見つからないときの終了コード
const EXIT_CODE_COMMAND_NOT_FOUND: i32 = 127;

// 辞書ディレクトリが存在しないときのメッセージ
const MESSAGE_DICTIONARY_NOT_FOUND: &str = "no such file or directory";

// MeCab の呼び出し
#[derive(Debug, Clone)]
pub struct MecabCommand {
    program: String,
    dictionary_directory: Option<PathBuf>,
    encoding: &'static Encoding,
}

impl Default for MecabCommand {
    fn default() -> Self {
        MecabCommand::new()
    }
}

impl MecabCommand {
    pub fn new() -> Self {
        MecabCommand {
            program: "mecab".to_owned(),
            dictionary_directory: None,
            encoding: UTF_8,
        }
    }

    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    // mecab -d DIR
    pub fn dictionary_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.dictionary_directory = Some(directory.into());
        self
    }

    /// 辞書の文字コード
    ///
    /// 入力はこの文字コードに変換して渡し，出力はこの文字コードとして読む。
    pub fn encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// テキストを解析して出力を [`MecabSentence`] として返す。
    pub fn analyze(&self, text: &str) -> Result<MecabSentence, AnalyzerError> {
        let mut command = Command::new(&self.program);
        if let Some(directory) = &self.dictionary_directory {
            command.arg("-d").arg(directory);
        }

        let mut child = match command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(AnalyzerError::CommandNotFound {
                    program: self.program.clone(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        // 出力を読みながら書き込まないとパイプが詰まる
        let input = self.encoding.encode(text).0.into_owned();
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "stdin is not captured"))?;
        let writer = thread::spawn(move || stdin.write_all(&input));

        let output = child.wait_with_output()?;
        let written = writer
            .join()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "stdin writer panicked"))?;

        let stdout = self.encoding.decode(&output.stdout).0;

        if !output.status.success() {
            let stderr = self.encoding.decode(&output.stderr).0;
            return Err(self.classify_failure(output.status.code(), &stdout, &stderr));
        }
        written?;

        Ok(MecabSentence::from_output(&stdout))
    }

    fn classify_failure(&self, code: Option<i32>, stdout: &str, stderr: &str) -> AnalyzerError {
        let message = last_line(stderr)
            .or_else(|| last_line(stdout))
            .unwrap_or("")
            .to_owned();

        if code == Some(EXIT_CODE_COMMAND_NOT_FOUND) {
            return AnalyzerError::CommandNotFound {
                program: self.program.clone(),
            };
        }

        if message.to_lowercase().contains(MESSAGE_DICTIONARY_NOT_FOUND) {
            return AnalyzerError::DictionaryNotFound {
                directory: self
                    .dictionary_directory
                    .clone()
                    .unwrap_or_default(),
            };
        }

        AnalyzerError::Failed { code, message }
    }
}

fn last_line(s: &str) -> Option<&str> {
    s.lines().rev().map(|line| line.trim()).find(|line| !line.is_empty())
}
