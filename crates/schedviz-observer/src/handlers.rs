//! HTTP endpoint handlers for the observer server.
//!
//! The only HTTP surface besides the `WebSocket` is the dashboard page
//! served at `/`. It is a single static HTML document: a console pane,
//! a row of thread cards, and a start button wired to the `WebSocket`
//! protocol defined in `schedviz-types`.

use axum::response::Html;

/// Serve the dashboard page.
///
/// # Route
///
/// `GET /`
#[allow(clippy::unused_async)]
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// The dashboard document, inlined so the binary is self-contained.
const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Schedviz</title>
    <style>
        body {
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 900px;
            margin: 0 auto;
        }
        h1 { color: #58a6ff; margin-bottom: 0.25rem; }
        .subtitle { color: #8b949e; margin-top: 0; }
        button {
            background: #238636;
            color: #ffffff;
            border: none;
            border-radius: 6px;
            padding: 0.6rem 1.4rem;
            font-family: inherit;
            font-size: 1rem;
            cursor: pointer;
        }
        button:hover { background: #2ea043; }
        #threads { display: flex; flex-wrap: wrap; margin: 1rem 0; }
        .card {
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 130px;
        }
        .card .label { color: #8b949e; font-size: 0.85rem; }
        .card .value { font-size: 1.2rem; font-weight: bold; }
        .READY .value { color: #d29922; }
        .RUNNING .value { color: #3fb950; }
        .FINISHED .value { color: #8b949e; }
        #console {
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem;
            height: 280px;
            overflow-y: auto;
            white-space: pre-wrap;
            font-size: 0.9rem;
        }
        .end { color: #58a6ff; font-weight: bold; }
    </style>
</head>
<body>
    <h1>Schedviz</h1>
    <p class="subtitle">Live thread-scheduler visualization</p>

    <button id="start">Start Simulation</button>

    <div id="threads"></div>

    <div id="console"></div>

    <script>
        const proto = location.protocol === 'https:' ? 'wss' : 'ws';
        const ws = new WebSocket(`${proto}://${location.host}/ws`);
        const consoleEl = document.getElementById('console');
        const threadsEl = document.getElementById('threads');

        function appendLine(text, cls) {
            const line = document.createElement('div');
            if (cls) line.className = cls;
            line.textContent = text;
            consoleEl.appendChild(line);
            consoleEl.scrollTop = consoleEl.scrollHeight;
        }

        function upsertCard(update) {
            let card = document.getElementById(`thread-${update.id}`);
            if (!card) {
                card = document.createElement('div');
                card.id = `thread-${update.id}`;
                card.innerHTML =
                    `<div class="label">Thread ${update.id}</div>` +
                    '<div class="value"></div>' +
                    '<div class="label detail"></div>';
                threadsEl.appendChild(card);
            }
            card.className = `card ${update.state}`;
            card.querySelector('.value').textContent = update.state;
            card.querySelector('.detail').textContent = update.details;
        }

        ws.onmessage = (ev) => {
            const msg = JSON.parse(ev.data);
            switch (msg.event) {
                case 'console_log':
                    appendLine(msg.data);
                    break;
                case 'thread_update':
                    upsertCard(msg);
                    break;
                case 'simulation_end':
                    appendLine(`--- ${msg.msg} ---`, 'end');
                    break;
            }
        };

        document.getElementById('start').onclick = () => {
            ws.send(JSON.stringify({ event: 'start_simulation' }));
        };
    </script>
</body>
</html>"#;
