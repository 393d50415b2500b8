use std::{env, error::Error, fs, path::PathBuf};

const GRAMMAR_NAME: &str = "heyvl";

fn main() -> Result<(), Box<dyn Error>> {
    let src_dir = PathBuf::from("src");
    let grammar_path = src_dir.join("grammar.json");
    let committed_parser = src_dir.join("parser.c");

    println!("cargo:rerun-if-changed={}", grammar_path.display());
    println!("cargo:rerun-if-changed={}", committed_parser.display());

    // A parser.c written by `tree-sitter generate` wins. Without one, the
    // parse tables are rendered from grammar.json into OUT_DIR.
    let (parser_path, include_dir) = if committed_parser.exists() {
        (committed_parser, src_dir)
    } else {
        let out_dir = PathBuf::from(env::var("OUT_DIR")?);
        let grammar_json = fs::read_to_string(&grammar_path)?;
        let (name, c_code) = tree_sitter_generate::generate_parser_for_grammar(&grammar_json)?;
        if name != GRAMMAR_NAME {
            return Err(format!(
                "{} declares grammar `{name}`, expected `{GRAMMAR_NAME}`",
                grammar_path.display()
            )
            .into());
        }

        let header_dir = out_dir.join("tree_sitter");
        fs::create_dir_all(&header_dir)?;
        fs::write(header_dir.join("parser.h"), tree_sitter::PARSER_HEADER)?;

        let parser_path = out_dir.join("parser.c");
        fs::write(&parser_path, c_code)?;
        (parser_path, out_dir)
    };

    let mut build = cc::Build::new();

    build
        .std("c11")
        .include(&include_dir)
        .warnings(false)
        .flag_if_supported("-Wno-unused-parameter")
        .flag_if_supported("-Wno-unused-but-set-variable")
        .flag_if_supported("-Wno-trigraphs");

    #[cfg(target_env = "msvc")]
    build.flag("-utf-8");

    build.file(&parser_path);
    build.compile("tree-sitter-heyvl");

    Ok(())
}
