//! Temp dirs, copying, cleanup and zip archives.
//!
//! Run with: cargo run --example files

use std::error::Error;
use std::ops::ControlFlow;
use xutils::archive::{unzip, zip_dir, zip_walk};
use xutils::fs::{clean_dir, copy_dir, file_sha256, read_dir_all, temp_dir, write_file};
use xutils::strings::format_size;

fn main() -> Result<(), Box<dyn Error>> {
    let tmp = temp_dir("xutils-demo-", None)?;
    let site = tmp.path().join("site");
    write_file(site.join("index.html"), b"<h1>hello</h1>")?;
    write_file(site.join("css/main.css"), b"body { margin: 0 }")?;
    write_file(site.join("cache/page.tmp"), b"stale")?;

    println!("site contents: {:?}", read_dir_all(&site)?);
    println!("index.html sha256: {}", file_sha256(site.join("index.html"))?);

    // Copy, then prune everything but the pages we ship
    let copy = tmp.path().join("copy");
    copy_dir(&site, &copy)?;
    let keep = [copy.join("index.html"), copy.join("css/main.css")];
    clean_dir(&copy, &keep)?;
    println!("after cleanup: {:?}", read_dir_all(&copy)?);

    // Zip the copy and list the archive
    let archive = tmp.path().join("site.zip");
    zip_dir(&copy, &archive, true)?;
    zip_walk(&archive, |entry, _| {
        println!("  {:<24} {}", entry.name, format_size(entry.size));
        Ok(ControlFlow::Continue(()))
    })?;

    let out = tmp.path().join("out");
    unzip(&archive, &out)?;
    println!("unzipped: {:?}", read_dir_all(&out)?);

    Ok(())
}
