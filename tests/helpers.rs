// Shared test helpers: a scripted UDP nameserver on localhost.
//
// The nameserver answers every query with whatever the test's reply function
// returns for it, and counts the queries it received.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::proto::op::{Message, MessageType, Query, ResponseCode};
use hickory_resolver::proto::rr::{Name, RData, Record};
use nslookup::config::Protocol;
use nslookup::TransportConfig;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

/// What the mock nameserver does with a query.
#[allow(dead_code)] // Not every test file uses every reply
pub enum Reply {
    /// NOERROR with these answers, owned by the queried name
    Answers(Vec<RData>),
    /// NOERROR with these answer records, owner names as given
    Records(Vec<Record>),
    /// The given response code and no answers
    Code(ResponseCode),
    /// No response at all
    Silent,
}

/// A running mock nameserver; the task stops when this is dropped.
pub struct MockNameserver {
    pub addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

#[allow(dead_code)]
impl MockNameserver {
    /// Number of queries received so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Transport configuration sending every query to this nameserver over UDP.
    pub fn transport(&self, timeout: Duration) -> TransportConfig {
        TransportConfig::custom(self.addr, Protocol::Udp, timeout)
    }
}

impl Drop for MockNameserver {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Starts a mock nameserver on an ephemeral localhost port.
pub async fn spawn_nameserver<F>(reply: F) -> MockNameserver
where
    F: Fn(&Query) -> Reply + Send + Sync + 'static,
{
    let socket = UdpSocket::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock nameserver");
    let addr = socket.local_addr().expect("Mock nameserver has no address");
    let queries = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&queries);

    let task = tokio::spawn(async move {
        let mut buf = vec![0u8; 4096];
        loop {
            let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                return;
            };
            counter.fetch_add(1, Ordering::SeqCst);
            let Ok(request) = Message::from_vec(&buf[..len]) else {
                continue;
            };
            let Some(query) = request.queries().first().cloned() else {
                continue;
            };

            let (code, answers) = match reply(&query) {
                Reply::Silent => continue,
                Reply::Code(code) => (code, Vec::new()),
                Reply::Answers(rdata) => (
                    ResponseCode::NoError,
                    rdata
                        .into_iter()
                        .map(|rdata| Record::from_rdata(query.name().clone(), 300, rdata))
                        .collect(),
                ),
                Reply::Records(records) => (ResponseCode::NoError, records),
            };

            let mut response = Message::new();
            response
                .set_id(request.id())
                .set_message_type(MessageType::Response)
                .set_op_code(request.op_code())
                .set_recursion_desired(request.recursion_desired())
                .set_recursion_available(true)
                .set_response_code(code);
            response.add_query(query);
            response.add_answers(answers);

            if let Ok(bytes) = response.to_vec() {
                let _ = socket.send_to(&bytes, peer).await;
            }
        }
    });

    MockNameserver {
        addr,
        queries,
        task,
    }
}

/// Parses a fully qualified test name.
#[allow(dead_code)]
pub fn name(value: &str) -> Name {
    Name::from_ascii(value).expect("Invalid test name")
}

/// Lowercase query name with its trailing dot, for matching in reply functions.
#[allow(dead_code)]
pub fn query_name(query: &Query) -> String {
    query.name().to_utf8().to_lowercase()
}

/// Answer record with an explicit owner name.
#[allow(dead_code)]
pub fn record(owner: &str, rdata: RData) -> Record {
    Record::from_rdata(name(owner), 300, rdata)
}

/// Argument vector from string literals.
#[allow(dead_code)]
pub fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}
