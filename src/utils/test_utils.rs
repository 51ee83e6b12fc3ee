use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use derive_builder::Builder;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::OwnedWriteHalf;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::error::PluginError;
use crate::io::entry_data::DirectoryEntry;
use crate::session::remote_session::{RemoteSession, SessionFactory};
use crate::settings::{FtpSettings, FtpSettingsBuilder};

pub(crate) const LOCALHOST: &str = "127.0.0.1:0";

pub(crate) fn test_settings() -> FtpSettings {
  FtpSettingsBuilder::default()
    .host("127.0.0.1")
    .port(21u16)
    .username("backup")
    .password("secret")
    .build()
    .expect("Settings should be valid")
}

/// A port nothing listens on.
pub(crate) async fn unused_port() -> u16 {
  let listener = TcpListener::bind(LOCALHOST).await.unwrap();
  listener.local_addr().unwrap().port()
}

/// Removes the file when dropped.
pub(crate) struct FileCleanup(PathBuf);

impl FileCleanup {
  pub(crate) fn new(path: &Path) -> Self {
    FileCleanup(path.to_path_buf())
  }
}

impl Drop for FileCleanup {
  fn drop(&mut self) {
    let _ = std::fs::remove_file(&self.0);
  }
}

#[derive(Clone, Debug, Builder)]
pub(crate) struct FakeServerBehaviour {
  #[builder(default = "String::from(\"secret\")")]
  password: String,
  /// Answer `TYPE I` with 504.
  #[builder(default)]
  refuse_binary: bool,
  #[builder(default)]
  listing: String,
  /// MKD, RMD and DELE on these paths fail with 550.
  #[builder(default)]
  failing_paths: Vec<String>,
  /// Raw reply to a successful MKD, `257 "path" created` when not set.
  #[builder(default)]
  make_dir_reply: Option<Vec<u8>>,
}

#[derive(Default)]
struct FakeServerState {
  commands: Vec<String>,
  stored: HashMap<String, Vec<u8>>,
}

/// Minimal FTP server answering one client at a time. Records every command it receives.
pub(crate) struct FakeFtpServer {
  address: SocketAddr,
  state: Arc<Mutex<FakeServerState>>,
  handle: JoinHandle<()>,
}

impl FakeFtpServer {
  pub(crate) async fn start(behaviour: FakeServerBehaviour) -> Self {
    let listener = TcpListener::bind(LOCALHOST).await.expect("Bind should succeed");
    let address = listener.local_addr().unwrap();
    let state = Arc::new(Mutex::new(FakeServerState::default()));
    let server_state = state.clone();
    let handle = tokio::spawn(async move {
      while let Ok((stream, _)) = listener.accept().await {
        serve(stream, &behaviour, &server_state).await;
      }
    });
    FakeFtpServer {
      address,
      state,
      handle,
    }
  }

  pub(crate) fn settings(&self, password: &str) -> FtpSettings {
    FtpSettingsBuilder::default()
      .host(self.address.ip().to_string())
      .port(self.address.port())
      .username("backup")
      .password(password)
      .build()
      .expect("Settings should be valid")
  }

  pub(crate) async fn commands(&self) -> Vec<String> {
    self.state.lock().await.commands.clone()
  }

  pub(crate) async fn stored(&self, path: &str) -> Option<Vec<u8>> {
    self.state.lock().await.stored.get(path).cloned()
  }
}

impl Drop for FakeFtpServer {
  fn drop(&mut self) {
    self.handle.abort();
  }
}

async fn reply(writer: &mut OwnedWriteHalf, message: &str) {
  reply_bytes(writer, message.as_bytes()).await;
}

async fn reply_bytes(writer: &mut OwnedWriteHalf, message: &[u8]) {
  let mut line = message.to_vec();
  line.extend_from_slice(b"\r\n");
  writer.write_all(&line).await.expect("Reply should be sent");
}

async fn serve(stream: TcpStream, behaviour: &FakeServerBehaviour, state: &Mutex<FakeServerState>) {
  let (reader, mut writer) = stream.into_split();
  let mut reader = BufReader::new(reader);
  let mut passive: Option<TcpListener> = None;
  reply(&mut writer, "220 Fake FTP server ready").await;

  loop {
    let mut line = String::new();
    match reader.read_line(&mut line).await {
      Ok(0) | Err(_) => break,
      Ok(_) => {}
    }
    let line = line.trim_end().to_string();
    state.lock().await.commands.push(line.clone());
    let (verb, argument) = line.split_once(' ').unwrap_or((line.as_str(), ""));

    match verb.to_ascii_uppercase().as_str() {
      "USER" => reply(&mut writer, "331 Password required").await,
      "PASS" if argument == behaviour.password => reply(&mut writer, "230 Logged in").await,
      "PASS" => reply(&mut writer, "530 Login incorrect").await,
      "TYPE" if behaviour.refuse_binary => {
        reply(&mut writer, "504 Command not implemented for that parameter").await
      }
      "TYPE" => reply(&mut writer, "200 Type set").await,
      "PASV" => {
        let listener = TcpListener::bind(LOCALHOST).await.expect("Bind should succeed");
        let port = listener.local_addr().unwrap().port();
        passive = Some(listener);
        reply(
          &mut writer,
          &format!(
            "227 Entering Passive Mode (127,0,0,1,{},{})",
            port >> 8,
            port & 0xff
          ),
        )
        .await;
      }
      "MKD" | "RMD" | "DELE" if behaviour.failing_paths.iter().any(|p| p == argument) => {
        reply(&mut writer, "550 Requested action not taken").await
      }
      "MKD" => match &behaviour.make_dir_reply {
        Some(raw) => reply_bytes(&mut writer, raw).await,
        None => reply(&mut writer, &format!("257 \"{argument}\" created")).await,
      },
      "RMD" | "DELE" => reply(&mut writer, "250 OK").await,
      "LIST" | "STOR" => match passive.take() {
        Some(listener) => {
          reply(&mut writer, "150 Opening data connection").await;
          let (mut data, _) = listener.accept().await.expect("Data connection expected");
          if verb.eq_ignore_ascii_case("STOR") {
            let mut content = Vec::new();
            let _ = data.read_to_end(&mut content).await;
            state.lock().await.stored.insert(argument.to_string(), content);
          } else {
            let _ = data.write_all(behaviour.listing.as_bytes()).await;
            let _ = data.shutdown().await;
          }
          drop(data);
          reply(&mut writer, "226 Transfer complete").await;
        }
        None => reply(&mut writer, "425 Use PASV first").await,
      },
      "QUIT" => {
        reply(&mut writer, "221 Bye").await;
        break;
      }
      _ => reply(&mut writer, "500 Command not understood").await,
    }
  }
}

#[derive(Default)]
struct MockState {
  operations: Vec<String>,
}

/// Session factory that records the operations instead of talking to a server.
///
/// Operations are recorded as `CONNECT`, `MKD path`, `RMD path`, `DELE path`,
/// `STOR path bytes`, `LIST path` and `QUIT`.
#[derive(Clone, Default)]
pub(crate) struct MockSessionFactory {
  state: Arc<StdMutex<MockState>>,
  failing: HashSet<String>,
  listing: Vec<DirectoryEntry>,
  refuse_connections: bool,
}

impl MockSessionFactory {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Makes the operation (e.g. `MKD /b`) fail with [`PluginError::RemoteOperationError`].
  pub(crate) fn failing_on(mut self, operation: &str) -> Self {
    self.failing.insert(operation.to_string());
    self
  }

  pub(crate) fn with_listing(mut self, listing: Vec<DirectoryEntry>) -> Self {
    self.listing = listing;
    self
  }

  pub(crate) fn refusing_connections(mut self) -> Self {
    self.refuse_connections = true;
    self
  }

  pub(crate) fn operations(&self) -> Vec<String> {
    self.state.lock().unwrap().operations.clone()
  }
}

#[async_trait]
impl SessionFactory for MockSessionFactory {
  async fn connect(&self, _settings: &FtpSettings) -> Result<Box<dyn RemoteSession>, PluginError> {
    self.state.lock().unwrap().operations.push("CONNECT".to_string());
    if self.refuse_connections {
      return Err(PluginError::ConnectionError("Connection refused".to_string()));
    }
    Ok(Box::new(MockSession {
      factory: self.clone(),
    }))
  }
}

struct MockSession {
  factory: MockSessionFactory,
}

impl MockSession {
  fn record(&self, operation: String) -> Result<(), PluginError> {
    self.factory.state.lock().unwrap().operations.push(operation.clone());
    if self.factory.failing.contains(&operation) {
      return Err(PluginError::RemoteOperationError(format!(
        "550 {operation} failed"
      )));
    }
    Ok(())
  }
}

#[async_trait]
impl RemoteSession for MockSession {
  async fn make_dir(&mut self, path: &str) -> Result<(), PluginError> {
    self.record(format!("MKD {path}"))
  }

  async fn remove_dir(&mut self, path: &str) -> Result<(), PluginError> {
    self.record(format!("RMD {path}"))
  }

  async fn delete(&mut self, path: &str) -> Result<(), PluginError> {
    self.record(format!("DELE {path}"))
  }

  async fn store(
    &mut self,
    path: &str,
    mut reader: Box<dyn Read + Send>,
  ) -> Result<u64, PluginError> {
    let mut content = Vec::new();
    reader
      .read_to_end(&mut content)
      .map_err(|e| PluginError::ConnectionError(e.to_string()))?;
    self.record(format!("STOR {path} {}", content.len()))?;
    Ok(content.len() as u64)
  }

  async fn list(&mut self, path: &str) -> Result<Vec<DirectoryEntry>, PluginError> {
    self.record(format!("LIST {path}"))?;
    Ok(self.factory.listing.clone())
  }

  async fn quit(&mut self) {
    let _ = self.record("QUIT".to_string());
  }
}
