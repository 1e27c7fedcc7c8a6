use anyhow::{bail, ensure, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use serde::Serialize;
use std::{
    env, fs,
    io::{self, Read},
};

use mecab_sentence::{
    analyzer::MecabCommand,
    mecab_output::{sentence::MecabSentence, token::MecabToken},
    sentence_splitter::split_sentences,
};

enum Mode {
    Split,
    Wakachi,
    Kana,
    Pronunciation,
    Json,
}

impl Mode {
    fn of(name: &str) -> Result<Self> {
        match name {
            "split" => Ok(Self::Split),
            "wakachi" => Ok(Self::Wakachi),
            "kana" => Ok(Self::Kana),
            "pronunciation" => Ok(Self::Pronunciation),
            "json" => Ok(Self::Json),
            name => bail!("Unknown mode: {}", name),
        }
    }
}

struct Args {
    mode: Mode,
    input_path: Option<String>,
    raw: bool,
    progress: bool,
    command: MecabCommand,
}

fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt(
        "m",
        "mode",
        "output mode (default: json)",
        "split|wakachi|kana|pronunciation|json",
    );
    opts.optopt("d", "dicdir", "dictionary directory passed to mecab", "DIR");
    opts.optopt("", "mecab", "mecab executable (default: mecab)", "PROGRAM");
    opts.optopt("e", "encoding", "dictionary charset (default: utf-8)", "LABEL");
    opts.optflag("", "raw", "input is already the output of mecab");
    opts.optflag("p", "progress", "show progress bar");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        print!("{}", opts.usage("Usage: mecab-sentence [options] [INPUT]"));
        return Ok(None);
    }

    let mode = match matches.opt_str("m") {
        Some(name) => Mode::of(&name)?,
        None => Mode::Json,
    };

    let mut command = MecabCommand::new();
    if let Some(program) = matches.opt_str("mecab") {
        command = command.program(program);
    }
    if let Some(directory) = matches.opt_str("d") {
        command = command.dictionary_directory(directory);
    }
    if let Some(label) = matches.opt_str("e") {
        let encoding = encoding_rs::Encoding::for_label(label.as_bytes())
            .with_context(|| format!("Unknown encoding: {}", label))?;
        command = command.encoding(encoding);
    }

    Ok(Some(Args {
        mode,
        input_path: matches.free.get(0).cloned(),
        raw: matches.opt_present("raw"),
        progress: matches.opt_present("p"),
        command,
    }))
}

#[derive(Serialize)]
struct AnalyzedSentence<'a> {
    sentence: &'a str,
    tokens: Vec<MecabToken<'a>>,
}

fn main() -> Result<()> {
    let args = match get_args()? {
        Some(args) => args,
        None => return Ok(()),
    };

    let text = match &args.input_path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            text
        }
    };

    // 解析済みのものはそのまま 1 つの文として扱う
    if args.raw {
        ensure!(
            !matches!(args.mode, Mode::Split),
            "Cannot split the output of mecab"
        );
        let sentence = MecabSentence::from_output(&text);
        let original = sentence.all_surfaces()?.concat();
        return print_sentence(&args.mode, &original, &sentence);
    }

    let sentences = split_sentences(&text);

    if let Mode::Split = args.mode {
        for sentence in &sentences {
            println!("{}", sentence);
        }
        return Ok(());
    }

    let pb = if args.progress {
        eprintln!("Processing {} sentences...", sentences.len());
        create_progress_bar(sentences.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    for sentence in sentences.iter().progress_with(pb) {
        let analyzed = args
            .command
            .analyze(sentence)
            .with_context(|| format!("Failed to analyze: {:?}", sentence))?;

        print_sentence(&args.mode, sentence, &analyzed)
            .with_context(|| format!("Failed to parse output of mecab: {:?}", sentence))?;
    }

    if args.progress {
        eprintln!("Finished.");
    }

    Ok(())
}

fn print_sentence(mode: &Mode, text: &str, sentence: &MecabSentence) -> Result<()> {
    match mode {
        Mode::Split => println!("{}", text),
        Mode::Wakachi => println!("{}", sentence.all_surfaces()?.join(" ")),
        Mode::Kana => println!("{}", sentence.to_kana()?),
        Mode::Pronunciation => println!("{}", sentence.to_pronunciation()?),
        Mode::Json => {
            let analyzed = AnalyzedSentence {
                sentence: text,
                tokens: sentence.all_tokens()?,
            };
            println!("{}", serde_json::to_string(&analyzed)?);
        }
    }

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
