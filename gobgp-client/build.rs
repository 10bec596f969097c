fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Supply a protoc binary in environments where one is not installed system-wide.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            unsafe {
                std::env::set_var("PROTOC", protoc);
            }
        }
    }
    tonic_build::compile_protos("../proto/gobgp.proto")?;
    Ok(())
}
