//! 模型目录探测
//!
//! 不加载模型, 只检查目录里的 GigaAM 文件是否齐全,
//! 部署前用来验证 bundle 里的模型布局。
//!
//! 用法:
//!   cargo run --example probe_models -- /path/to/models/gigaam

use std::env;
use std::path::Path;
use typeasy_core::models::{self, GigaAmModelFiles};

fn main() {
    let dir = env::args()
        .nth(1)
        .unwrap_or_else(|| "models/gigaam".to_string());

    println!("=== Typeasy 模型目录探测 ===");
    println!("📁 目录: {}\n", dir);

    match models::resolve(Path::new(&dir)) {
        Ok(GigaAmModelFiles::Ctc { model, tokens }) => {
            println!("✅ 变体: CTC");
            println!("   - model:  {}", model.display());
            println!("   - tokens: {}", tokens.display());
        }
        Ok(GigaAmModelFiles::Transducer {
            encoder,
            decoder,
            joiner,
            tokens,
        }) => {
            println!("✅ 变体: Transducer");
            println!("   - encoder: {}", encoder.display());
            println!("   - decoder: {}", decoder.display());
            println!("   - joiner:  {}", joiner.display());
            println!("   - tokens:  {}", tokens.display());
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
