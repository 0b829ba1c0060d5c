use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SHERPA_ONNX_DIR");

    let link_sherpa = env::var_os("CARGO_FEATURE_SHERPA").is_some();
    let regen_bindings = env::var_os("CARGO_FEATURE_BUILDTIME_BINDGEN").is_some();

    // 两个 feature 都没开时不需要本机的 sherpa-onnx 安装,
    // rlib 构建 (以及 Swift 侧只用预生成头文件的场景) 直接返回
    if !link_sherpa && !regen_bindings {
        return;
    }

    // sherpa-onnx 预编译包位置
    // 优先级: SHERPA_ONNX_DIR 环境变量 > 本地 deps/sherpa-onnx > /opt/sherpa-onnx
    let sherpa_dir = env::var("SHERPA_ONNX_DIR").unwrap_or_else(|_| {
        let local_path = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap())
            .parent()
            .unwrap()
            .join("deps/sherpa-onnx");
        if local_path.exists() {
            local_path.to_str().unwrap().to_string()
        } else {
            "/opt/sherpa-onnx".to_string()
        }
    });

    if link_sherpa {
        println!("cargo:warning=Using sherpa-onnx from: {}", sherpa_dir);
        println!("cargo:rustc-link-search=native={}/lib", sherpa_dir);
        println!("cargo:rustc-link-lib=dylib=sherpa-onnx-c-api");
        println!("cargo:rustc-link-lib=dylib=onnxruntime");
    }

    #[cfg(feature = "buildtime-bindgen")]
    generate_bindings(&sherpa_dir);

    #[cfg(not(feature = "buildtime-bindgen"))]
    drop(sherpa_dir);
}

/// 从安装好的 c-api.h 重新生成 sherpa-onnx Rust 绑定
///
/// 默认构建使用 src/sys/bindings.rs 里提交的声明, 只有升级
/// sherpa-onnx 版本时才需要开 buildtime-bindgen 重新生成。
#[cfg(feature = "buildtime-bindgen")]
fn generate_bindings(sherpa_dir: &str) {
    let bindings_path = PathBuf::from(env::var("OUT_DIR").unwrap()).join("sherpa_bindings.rs");
    let header_path = format!("{}/include/sherpa-onnx/c-api/c-api.h", sherpa_dir);

    println!("cargo:rerun-if-changed={}", header_path);

    let bindings = bindgen::Builder::default()
        .header(header_path)
        .allowlist_function("SherpaOnnx.*")
        .allowlist_type("SherpaOnnx.*")
        .generate()
        .expect("Failed to generate sherpa-onnx bindings");

    bindings
        .write_to_file(&bindings_path)
        .expect("Failed to write bindings");
}
