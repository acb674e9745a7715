use anyhow::{Context, Result};
use reqwest::StatusCode;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::sleep;

const NOT_FOUND_BODY: &str = "File not found.\n";

/// Write a set of test files, including an empty and a binary one
pub fn create_test_files(dir: &Path, count: usize) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(count + 2);

    for i in 0..count {
        let filename = format!("file{}.txt", i);
        let content = format!("Test file {} content\n", i);
        paths.push(write_test_file(dir, &filename, content.as_bytes())?);
    }

    paths.push(write_test_file(dir, "empty.txt", b"")?);

    let binary: Vec<u8> = (0..=255u8).cycle().take(64 * 1024).collect();
    paths.push(write_test_file(dir, "blob.bin", &binary)?);

    Ok(paths)
}

fn write_test_file(dir: &Path, filename: &str, content: &[u8]) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)
        .with_context(|| format!("Failed to create test file: {:?}", file_path))?;
    Ok(file_path)
}

pub async fn wait_for_server(client: &reqwest::Client, url: &str) -> Result<()> {
    println!("Waiting for server to be ready...");
    for i in 0..30 {
        match client.get(url).send().await {
            Ok(response) if response.status().is_success() => {
                let usage = response.text().await?;
                println!("Server is ready: {}", usage.trim());
                return Ok(());
            }
            _ => {
                if i < 29 {
                    sleep(Duration::from_secs(1)).await;
                }
            }
        }
    }

    anyhow::bail!("Server did not become ready within 30 seconds");
}

/// Upload a file and return the token the server issued for it
pub async fn upload_file(
    client: &reqwest::Client,
    server_url: &str,
    path: &Path,
) -> Result<String> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Test file has no usable name")?;
    let content = fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;

    let response = client
        .put(format!("{}/{}", server_url, filename))
        .body(content)
        .send()
        .await
        .with_context(|| format!("Failed to upload {}", filename))?;

    let status = response.status();
    let reply = response.text().await?;
    if status != StatusCode::OK {
        anyhow::bail!("Upload of {} failed with {}: {}", filename, status, reply);
    }

    let token = token_from_reply(&reply)
        .with_context(|| format!("Unexpected upload reply: {:?}", reply))?;
    common::validate(&token)
        .with_context(|| format!("Server issued a malformed token: {:?}", token))?;

    if reply.starts_with("curl ") && !reply.trim_end().ends_with(filename) {
        anyhow::bail!("Retrieval command does not name {}: {:?}", filename, reply);
    }

    println!("  ✓ Uploaded {} as {}", filename, token);
    Ok(token)
}

/// Accepts both `curl <base>/<token> ><name>` and a bare token
fn token_from_reply(reply: &str) -> Option<String> {
    let mut words = reply.split_whitespace();
    match words.next()? {
        "curl" => words.next()?.rsplit('/').next().map(str::to_string),
        token => Some(token.to_string()),
    }
}

pub async fn download_file(
    client: &reqwest::Client,
    server_url: &str,
    token: &str,
    output: &Path,
) -> Result<Vec<u8>> {
    let response = client
        .get(format!("{}/{}", server_url, token))
        .send()
        .await
        .with_context(|| format!("Failed to download {}", token))?;

    let status = response.status();
    if status != StatusCode::OK {
        anyhow::bail!("Download of {} failed with {}", token, status);
    }

    let content = response.bytes().await?.to_vec();
    fs::write(output, &content)
        .with_context(|| format!("Failed to save download to {:?}", output))?;
    Ok(content)
}

/// Expect the generic 404 for a path that must not resolve to a file
pub async fn expect_not_found(
    client: &reqwest::Client,
    server_url: &str,
    path: &str,
) -> Result<()> {
    let response = client
        .get(format!("{}/{}", server_url, path))
        .send()
        .await
        .with_context(|| format!("Failed to request {}", path))?;

    let status = response.status();
    let body = response.text().await?;
    if status != StatusCode::NOT_FOUND || body != NOT_FOUND_BODY {
        anyhow::bail!("Expected 404 for {:?}, got {}: {:?}", path, status, body);
    }

    println!("  ✓ {:?} is not found", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_reply() {
        assert_eq!(
            token_from_reply("curl http://localhost:3000/abcDEF234567 >report.txt\n"),
            Some("abcDEF234567".to_string())
        );
        assert_eq!(
            token_from_reply("abcDEF234567\n"),
            Some("abcDEF234567".to_string())
        );
        assert_eq!(token_from_reply(""), None);
    }
}
