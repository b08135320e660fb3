//! Scripted shell sessions against a live mock backend.

use std::net::SocketAddr;

use medicine_cli::{shell, Terminal};
use medicine_core::{
    HttpMethod, HttpRequest, HttpResponse, MedicineApi, MedicineController, Transport,
    TransportError, UreqTransport,
};

fn start_server(seed: Vec<mock_server::Medicine>) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, seed).await
        })
        .unwrap();
    });

    addr
}

fn seed(id: &str, name: &str, price: &str, stock: &str) -> mock_server::Medicine {
    mock_server::Medicine {
        id: id.to_string(),
        name: name.to_string(),
        price: price.to_string(),
        stock: stock.to_string(),
    }
}

/// Run one session with `script` as stdin; returns what was written.
fn session(addr: SocketAddr, script: &str) -> String {
    let api = MedicineApi::new(&format!("http://{addr}"), UreqTransport::new());
    let terminal = Terminal::new(script.as_bytes(), Vec::new());
    let mut controller = MedicineController::new(api, terminal);
    shell::run(&mut controller).unwrap();
    String::from_utf8(controller.prompt().output().clone()).unwrap()
}

fn backend_names(addr: SocketAddr) -> Vec<String> {
    let api = MedicineApi::new(&format!("http://{addr}"), UreqTransport::new());
    api.list().unwrap().into_iter().map(|m| m.name).collect()
}

#[test]
fn empty_backend_shows_placeholder() {
    let addr = start_server(Vec::new());
    let out = session(addr, "quit\n");
    assert!(out.contains("No medicines available"));
}

#[test]
fn add_then_list() {
    let addr = start_server(Vec::new());
    let out = session(addr, "add\nParacetamol\n25\n100\ns\nquit\n");

    assert!(out.contains("-- Add Medicine Details --"));
    assert!(out.contains("** Paracetamol Details Added Successfully"));
    assert!(out.contains("₹25"));
    assert_eq!(backend_names(addr), vec!["Paracetamol".to_string()]);
}

#[test]
fn incomplete_add_sends_nothing_until_completed() {
    let addr = start_server(Vec::new());
    // First pass leaves stock empty; second pass keeps name and price.
    let out = session(addr, "add\nZinc\n8\n\ns\n\n\n3\ns\nquit\n");

    assert!(out.contains("** Please fill out the form completely"));
    assert!(out.contains("** Zinc Details Added Successfully"));
    assert_eq!(backend_names(addr), vec!["Zinc".to_string()]);
}

#[test]
fn edit_keeps_unchanged_fields() {
    let addr = start_server(vec![seed("1", "Aspirin", "4", "10")]);
    let out = session(addr, "edit 1\n\n6\n\ns\nquit\n");

    assert!(out.contains("-- Edit Medicine Details --"));
    assert!(out.contains("Medicine Price [4]: "));
    assert!(out.contains("** Aspirin Details Updated Successfully"));

    let api = MedicineApi::new(&format!("http://{addr}"), UreqTransport::new());
    let medicines = api.list().unwrap();
    assert_eq!(medicines[0].id.as_str(), "1");
    assert_eq!(medicines[0].price, "6");
    assert_eq!(medicines[0].stock, "10");
}

#[test]
fn close_discards_edits() {
    let addr = start_server(vec![seed("1", "Aspirin", "4", "10")]);
    session(addr, "edit 1\nRenamed\n\n\nc\nquit\n");
    assert_eq!(backend_names(addr), vec!["Aspirin".to_string()]);
}

#[test]
fn delete_requires_confirmation() {
    let addr = start_server(vec![seed("1", "Aspirin", "4", "10"), seed("2", "Zinc", "8", "3")]);

    session(addr, "delete 2\nn\nquit\n");
    assert_eq!(backend_names(addr).len(), 2);

    let out = session(addr, "delete 2\ny\nquit\n");
    assert!(out.contains("** Medicine deleted successfully"));
    assert_eq!(backend_names(addr), vec!["Aspirin".to_string()]);
}

#[test]
fn unknown_row_is_reported() {
    let addr = start_server(vec![seed("1", "Aspirin", "4", "10")]);
    let out = session(addr, "edit 5\ndelete 9\nquit\n");
    assert!(out.contains("no medicine on row 5"));
    assert!(out.contains("no medicine on row 9"));
}

#[test]
fn dash_clears_a_field_while_editing() {
    let addr = start_server(vec![seed("1", "Aspirin", "4", "10")]);
    // Clearing stock blocks the update; the second pass refills it.
    let out = session(addr, "edit 1\n\n6\n-\ns\n\n\n12\ns\nquit\n");

    assert!(out.contains("** Please fill out the form completely"));
    assert!(out.contains("Stock in Nos []: "));
    assert!(out.contains("** Aspirin Details Updated Successfully"));

    let api = MedicineApi::new(&format!("http://{addr}"), UreqTransport::new());
    let medicines = api.list().unwrap();
    assert_eq!(medicines[0].price, "6");
    assert_eq!(medicines[0].stock, "12");
}

/// Passes everything through except deletes, which the backend refuses.
struct ReadOnlyBackend(UreqTransport);

impl Transport for ReadOnlyBackend {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        if request.method == HttpMethod::Delete {
            return Ok(HttpResponse {
                status: 500,
                headers: Vec::new(),
                body: "read-only".to_string(),
            });
        }
        self.0.execute(request)
    }
}

#[test]
fn failed_delete_is_reported() {
    let addr = start_server(vec![seed("1", "Aspirin", "4", "10")]);
    let api = MedicineApi::new(&format!("http://{addr}"), ReadOnlyBackend(UreqTransport::new()));
    let terminal = Terminal::new("delete 1\ny\nquit\n".as_bytes(), Vec::new());
    let mut controller = MedicineController::new(api, terminal);

    shell::run(&mut controller).unwrap();

    let out = String::from_utf8(controller.prompt().output().clone()).unwrap();
    assert!(out.contains("request failed: HTTP 500: read-only"));
    assert!(!out.contains("Medicine deleted successfully"));
    assert_eq!(backend_names(addr), vec!["Aspirin".to_string()]);
}
