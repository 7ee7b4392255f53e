//! Shared utilities for integration testing against a fake JSON-RPC node.

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Outcome of one JSON-RPC call on the mock node.
pub type RpcReply = Result<Value, (i64, String)>;

/// Start a mock JSON-RPC node on an ephemeral port.
///
/// `handler` gets the method name and params of every request and returns
/// either a result value or an error code and message.
pub async fn start_mock_node<F>(handler: F) -> SocketAddr
where
    F: Fn(&str, &Value) -> RpcReply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let handler = handler.clone();
                    tokio::spawn(async move {
                        let _ = serve_one(socket, handler.as_ref()).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

async fn serve_one<F>(mut socket: TcpStream, handler: &F) -> std::io::Result<()>
where
    F: Fn(&str, &Value) -> RpcReply,
{
    let body = read_request_body(&mut socket).await?;
    let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let reply = match &request {
        Value::Array(batch) => Value::Array(batch.iter().map(|r| answer(r, handler)).collect()),
        single => answer(single, handler),
    };

    let payload = reply.to_string();
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        payload.len(),
        payload
    );
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}

fn answer<F>(request: &Value, handler: &F) -> Value
where
    F: Fn(&str, &Value) -> RpcReply,
{
    let id = request.get("id").cloned().unwrap_or(Value::Null);
    let method = request.get("method").and_then(Value::as_str).unwrap_or_default();
    let params = request.get("params").cloned().unwrap_or(Value::Null);

    match handler(method, &params) {
        Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
        Err((code, message)) => json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": code, "message": message }
        }),
    }
}

async fn read_request_body(socket: &mut TcpStream) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Ok(Vec::new());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find(&buf, b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Ok(buf[header_end..].to_vec())
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Parse a `0x`-prefixed quantity as sent by the client.
#[allow(dead_code)]
pub fn parse_quantity(value: &Value) -> u64 {
    let text = value.as_str().unwrap();
    u64::from_str_radix(text.trim_start_matches("0x"), 16).unwrap()
}

/// A block as returned by `eth_getBlockByNumber(number, true)`.
#[allow(dead_code)]
pub fn full_block(number: u64, transactions: Vec<Value>) -> Value {
    json!({
        "hash": hash_word(0xb1, number),
        "parentHash": hash_word(0xb1, number.saturating_sub(1)),
        "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
        "miner": "0x0000000000000000000000000000000000000000",
        "stateRoot": hash_word(0x51, number),
        "transactionsRoot": hash_word(0x71, number),
        "receiptsRoot": hash_word(0x81, number),
        "logsBloom": format!("0x{}", "0".repeat(512)),
        "difficulty": "0x0",
        "number": format!("0x{:x}", number),
        "gasLimit": "0x1c9c380",
        "gasUsed": "0x5208",
        "timestamp": "0x65f0a000",
        "extraData": "0x",
        "mixHash": hash_word(0x00, 0),
        "nonce": "0x0000000000000000",
        "baseFeePerGas": "0x3b9aca00",
        "size": "0x400",
        "uncles": [],
        "transactions": transactions,
    })
}

/// A signed legacy (type 0) transaction. `to: None` is a contract creation.
#[allow(dead_code)]
pub fn legacy_tx(block: u64, index: u64, from: &str, to: Option<&str>) -> Value {
    json!({
        "type": "0x0",
        "hash": hash_word(0x7a, block * 1000 + index),
        "blockHash": hash_word(0xb1, block),
        "blockNumber": format!("0x{:x}", block),
        "transactionIndex": format!("0x{:x}", index),
        "from": from,
        "to": to,
        "nonce": format!("0x{:x}", index),
        "gas": "0x5208",
        "gasPrice": "0x3b9aca00",
        "value": "0x0",
        "input": "0x",
        "chainId": "0x1",
        "v": "0x25",
        "r": "0x1",
        "s": "0x1",
    })
}

/// A signed EIP-1559 (type 2) transaction.
#[allow(dead_code)]
pub fn eip1559_tx(block: u64, index: u64, from: &str, to: &str) -> Value {
    json!({
        "type": "0x2",
        "hash": hash_word(0x7a, block * 1000 + index),
        "blockHash": hash_word(0xb1, block),
        "blockNumber": format!("0x{:x}", block),
        "transactionIndex": format!("0x{:x}", index),
        "from": from,
        "to": to,
        "nonce": format!("0x{:x}", index),
        "gas": "0x5208",
        "maxFeePerGas": "0x77359400",
        "maxPriorityFeePerGas": "0x3b9aca00",
        "gasPrice": "0x3b9aca00",
        "value": "0x0",
        "input": "0x",
        "accessList": [],
        "chainId": "0x1",
        "v": "0x0",
        "yParity": "0x0",
        "r": "0x1",
        "s": "0x1",
    })
}

#[allow(dead_code)]
fn hash_word(tag: u8, n: u64) -> String {
    format!("0x{:02x}{:062x}", tag, n)
}
