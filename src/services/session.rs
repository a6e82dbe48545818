use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::error::{PathvizResult, SessionError, SessionResult};
use crate::graph::Graph;
use crate::services::algorithm::{Algorithm, DEFAULT_HEURISTIC_SCALE};
use crate::services::pacer::{ReplayPacer, TokioPacer};

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// 空闲，接受配置修改与运行请求
    Idle,
    /// 正在执行并回放
    Running,
    /// 回放完成，最终路径可见
    Settled,
    /// 次级展示浮层
    Overlay,
    /// 终态，直到重置
    Closed,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::Running => "running",
            Mode::Settled => "settled",
            Mode::Overlay => "overlay",
            Mode::Closed => "closed",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 回放速度预设
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedPreset {
    Slow,
    Normal,
    Fast,
}

impl SpeedPreset {
    /// Per-step interval for the preset, in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        match self {
            SpeedPreset::Slow => 600,
            SpeedPreset::Normal => 300,
            SpeedPreset::Fast => 100,
        }
    }
}

/// Initial configuration for a playback session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub algorithm: Algorithm,
    pub speed_ms: u64,
    pub heuristic_scale: f64,
    pub start_id: String,
    pub end_id: String,
}

impl SessionOptions {
    pub fn new(start_id: impl Into<String>, end_id: impl Into<String>) -> Self {
        Self {
            algorithm: Algorithm::Dijkstra,
            speed_ms: SpeedPreset::Normal.interval_ms(),
            heuristic_scale: DEFAULT_HEURISTIC_SCALE,
            start_id: start_id.into(),
            end_id: end_id.into(),
        }
    }
}

/// Full mutable state of a session, guarded by one lock.
#[derive(Debug, Clone)]
struct SessionState {
    mode: Mode,
    algorithm: Algorithm,
    speed_ms: u64,
    heuristic_scale: f64,
    start_id: String,
    end_id: String,
    revealed: Vec<String>,
    path: Vec<String>,
    distance: f64,
    logs: Vec<String>,
    /// Bumped by every run start and every reset; a replay loop whose
    /// generation no longer matches stops without touching the state.
    generation: u64,
}

impl SessionState {
    fn initial(options: &SessionOptions) -> Self {
        Self {
            mode: Mode::Idle,
            algorithm: options.algorithm,
            speed_ms: options.speed_ms,
            heuristic_scale: options.heuristic_scale,
            start_id: options.start_id.clone(),
            end_id: options.end_id.clone(),
            revealed: Vec::new(),
            path: Vec::new(),
            distance: 0.0,
            logs: Vec::new(),
            generation: 0,
        }
    }
}

/// Read-only view of the session handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub mode: Mode,
    pub algorithm: Algorithm,
    pub speed_ms: u64,
    pub start_id: String,
    pub end_id: String,
    pub revealed: Vec<String>,
    pub path: Vec<String>,
    pub distance: f64,
    pub logs: Vec<String>,
}

/// Session state machine governing run lifecycle and paced trace replay.
///
/// Owned by the caller; all configuration flows through explicit setters
/// rather than ambient global state. One run executes at a time: the
/// `Running` guard is checked and set under a single write lock.
pub struct PlaybackSession {
    session_id: Uuid,
    graph: Arc<Graph>,
    options: SessionOptions,
    pacer: Box<dyn ReplayPacer>,
    state: RwLock<SessionState>,
}

impl PlaybackSession {
    /// Create a session with the production tokio-backed pacer.
    pub fn new(graph: Arc<Graph>, options: SessionOptions) -> SessionResult<Self> {
        Self::with_pacer(graph, options, Box::new(TokioPacer))
    }

    /// Create a session with a caller-supplied pacer.
    pub fn with_pacer(
        graph: Arc<Graph>,
        options: SessionOptions,
        pacer: Box<dyn ReplayPacer>,
    ) -> SessionResult<Self> {
        validate_options(&graph, &options)?;
        Ok(Self {
            session_id: Uuid::new_v4(),
            state: RwLock::new(SessionState::initial(&options)),
            graph,
            options,
            pacer,
        })
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn mode(&self) -> Mode {
        self.state.read().mode
    }

    pub fn algorithm(&self) -> Algorithm {
        self.state.read().algorithm
    }

    pub fn speed_ms(&self) -> u64 {
        self.state.read().speed_ms
    }

    pub fn start_id(&self) -> String {
        self.state.read().start_id.clone()
    }

    pub fn end_id(&self) -> String {
        self.state.read().end_id.clone()
    }

    /// Currently revealed prefix of the visitation trace.
    pub fn revealed(&self) -> Vec<String> {
        self.state.read().revealed.clone()
    }

    /// Final path, available once the session has settled.
    pub fn path(&self) -> Vec<String> {
        self.state.read().path.clone()
    }

    pub fn distance(&self) -> f64 {
        self.state.read().distance
    }

    /// Append-only log of human-readable run events.
    pub fn logs(&self) -> Vec<String> {
        self.state.read().logs.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let st = self.state.read();
        SessionSnapshot {
            mode: st.mode,
            algorithm: st.algorithm,
            speed_ms: st.speed_ms,
            start_id: st.start_id.clone(),
            end_id: st.end_id.clone(),
            revealed: st.revealed.clone(),
            path: st.path.clone(),
            distance: st.distance,
            logs: st.logs.clone(),
        }
    }

    pub fn set_algorithm(&self, algorithm: Algorithm) -> SessionResult<()> {
        let mut st = self.state.write();
        ensure_configurable(&st, "set_algorithm")?;
        st.algorithm = algorithm;
        Ok(())
    }

    pub fn set_speed_preset(&self, preset: SpeedPreset) -> SessionResult<()> {
        self.set_speed_ms(preset.interval_ms())
    }

    pub fn set_speed_ms(&self, speed_ms: u64) -> SessionResult<()> {
        if speed_ms == 0 {
            return Err(SessionError::InvalidConfiguration(
                "replay interval must be positive".to_string(),
            ));
        }
        let mut st = self.state.write();
        ensure_configurable(&st, "set_speed")?;
        st.speed_ms = speed_ms;
        Ok(())
    }

    pub fn set_start(&self, id: &str) -> SessionResult<()> {
        if !self.graph.contains_node(id) {
            return Err(SessionError::UnknownNode(id.to_string()));
        }
        let mut st = self.state.write();
        ensure_configurable(&st, "set_start")?;
        st.start_id = id.to_string();
        Ok(())
    }

    pub fn set_end(&self, id: &str) -> SessionResult<()> {
        if !self.graph.contains_node(id) {
            return Err(SessionError::UnknownNode(id.to_string()));
        }
        let mut st = self.state.write();
        ensure_configurable(&st, "set_end")?;
        st.end_id = id.to_string();
        Ok(())
    }

    /// Execute the selected strategy and replay its trace step by step.
    ///
    /// Valid from `Idle` or `Settled`. The strategy runs synchronously
    /// before any replay begins, so a later cancellation never invalidates
    /// the computed result; only the pacing between reveals suspends.
    /// Settles with the final path visible on success, returns to `Idle`
    /// when the endpoints are disconnected.
    pub async fn request_run(&self) -> PathvizResult<()> {
        let (algorithm, speed_ms, heuristic_scale, start, end, prior_mode, run_gen) = {
            let mut st = self.state.write();
            ensure_configurable(&st, "request_run")?;
            let prior_mode = st.mode;
            st.mode = Mode::Running;
            st.generation += 1;
            st.revealed.clear();
            st.path.clear();
            st.logs.clear();
            st.distance = 0.0;
            let banner = format!(
                "[INFO] Running {} algorithm",
                st.algorithm.to_string().to_uppercase()
            );
            st.logs.push(banner);
            let start_end_line =
                format!("[INFO] Start: {}, End: {}", st.start_id, st.end_id);
            st.logs.push(start_end_line);
            (
                st.algorithm,
                st.speed_ms,
                st.heuristic_scale,
                st.start_id.clone(),
                st.end_id.clone(),
                prior_mode,
                st.generation,
            )
        };

        log::info!(
            "session {}: running {} from {} to {}",
            self.session_id,
            algorithm,
            start,
            end
        );

        let result = match algorithm.execute_scaled(&self.graph, &start, &end, heuristic_scale) {
            Ok(result) => result,
            Err(err) => {
                let mut st = self.state.write();
                if st.generation == run_gen {
                    st.mode = prior_mode;
                }
                return Err(err.into());
            }
        };

        let interval = Duration::from_millis(speed_ms);
        for (i, node_id) in result.visited_order.iter().enumerate() {
            {
                let mut st = self.state.write();
                if st.generation != run_gen {
                    // 运行期间被重置，静默放弃剩余回放
                    return Ok(());
                }
                st.revealed = result.visited_order[..=i].to_vec();
                st.logs.push(format!("[VISIT] Exploring node {}", node_id));
            }
            self.pacer.pause(interval).await;
        }

        let mut st = self.state.write();
        if st.generation != run_gen {
            return Ok(());
        }

        if result.is_reachable() {
            st.path = result.path.clone();
            st.distance = result.distance;
            st.logs
                .push(format!("[SUCCESS] Path found: {}", result.path.join(" -> ")));
            st.logs
                .push(format!("[INFO] Total distance: {:.2}", result.distance));
            st.mode = Mode::Settled;
            log::info!(
                "session {}: settled with distance {:.2}",
                self.session_id,
                result.distance
            );
        } else {
            st.logs.push("[ERROR] No path found".to_string());
            st.mode = Mode::Idle;
            log::warn!(
                "session {}: no path from {} to {}",
                self.session_id,
                start,
                end
            );
        }

        Ok(())
    }

    /// Secondary presentation overlay; only reachable once a run settled.
    pub fn show_overlay(&self) -> SessionResult<()> {
        let mut st = self.state.write();
        if st.mode != Mode::Settled {
            return Err(SessionError::InvalidTransition {
                from: st.mode.as_str(),
                operation: "show_overlay",
            });
        }
        st.mode = Mode::Overlay;
        Ok(())
    }

    /// Acknowledge the overlay; the session stays closed until reset.
    pub fn confirm_overlay(&self) -> SessionResult<()> {
        let mut st = self.state.write();
        if st.mode != Mode::Overlay {
            return Err(SessionError::InvalidTransition {
                from: st.mode.as_str(),
                operation: "confirm_overlay",
            });
        }
        st.mode = Mode::Closed;
        Ok(())
    }

    /// Restore every session field to its constructor defaults.
    ///
    /// Valid from any state. Issued mid-run it cancels the remaining
    /// reveals: the replay loop observes the generation bump and stops
    /// without leaving a partial trace visible.
    pub fn reset(&self) {
        let mut st = self.state.write();
        let generation = st.generation + 1;
        *st = SessionState::initial(&self.options);
        st.generation = generation;
        log::debug!("session {}: reset", self.session_id);
    }
}

fn ensure_configurable(state: &SessionState, operation: &'static str) -> SessionResult<()> {
    if matches!(state.mode, Mode::Idle | Mode::Settled) {
        Ok(())
    } else {
        Err(SessionError::InvalidTransition {
            from: state.mode.as_str(),
            operation,
        })
    }
}

fn validate_options(graph: &Graph, options: &SessionOptions) -> SessionResult<()> {
    if options.speed_ms == 0 {
        return Err(SessionError::InvalidConfiguration(
            "replay interval must be positive".to_string(),
        ));
    }
    if options.heuristic_scale <= 0.0 {
        return Err(SessionError::InvalidConfiguration(
            "heuristic scale must be positive".to_string(),
        ));
    }
    for id in [&options.start_id, &options.end_id] {
        if !graph.contains_node(id) {
            return Err(SessionError::UnknownNode(id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node};
    use std::sync::{Mutex as StdMutex, OnceLock, Weak};

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    /// 不等待的测试专用节奏器
    struct NoopPacer;

    #[async_trait::async_trait]
    impl ReplayPacer for NoopPacer {
        async fn pause(&self, _interval: Duration) {}
    }

    // a-b-c 链加孤立节点x
    fn chain_graph() -> Arc<Graph> {
        let nodes = vec![
            Node::new("a", "A", 0.0, 0.0),
            Node::new("b", "B", 10.0, 0.0),
            Node::new("c", "C", 20.0, 0.0),
            Node::new("x", "X", 99.0, 99.0),
        ];
        let edges = vec![
            Edge::new("e1", "a", "b", 1.0),
            Edge::new("e2", "b", "c", 2.0),
        ];
        Arc::new(Graph::new(nodes, edges).expect("Graph should build in test"))
    }

    fn session(start: &str, end: &str) -> PlaybackSession {
        PlaybackSession::with_pacer(chain_graph(), SessionOptions::new(start, end), Box::new(NoopPacer))
            .expect("Session should build in test")
    }

    #[test]
    fn test_initial_state() {
        let session = session("a", "c");
        assert_eq!(session.mode(), Mode::Idle);
        assert_eq!(session.algorithm(), Algorithm::Dijkstra);
        assert_eq!(session.speed_ms(), 300);
        assert!(session.revealed().is_empty());
        assert!(session.path().is_empty());
        assert!(session.logs().is_empty());
    }

    #[test]
    fn test_constructor_validates_options() {
        let graph = chain_graph();

        let mut options = SessionOptions::new("a", "c");
        options.speed_ms = 0;
        assert!(matches!(
            PlaybackSession::new(graph.clone(), options),
            Err(SessionError::InvalidConfiguration(_))
        ));

        let options = SessionOptions::new("a", "missing");
        assert!(matches!(
            PlaybackSession::new(graph, options),
            Err(SessionError::UnknownNode(id)) if id == "missing"
        ));
    }

    #[tokio::test]
    async fn test_full_replay_settles() {
        let session = session("a", "c");
        session.request_run().await.expect("Run should succeed in test");

        assert_eq!(session.mode(), Mode::Settled);
        assert_eq!(session.revealed(), ids(&["a", "b", "c"]));
        assert_eq!(session.path(), ids(&["a", "b", "c"]));
        assert_eq!(session.distance(), 3.0);

        let logs = session.logs();
        assert_eq!(logs[0], "[INFO] Running DIJKSTRA algorithm");
        assert!(logs.iter().any(|line| line.starts_with("[SUCCESS]")));
        assert_eq!(logs.last().map(String::as_str), Some("[INFO] Total distance: 3.00"));
    }

    #[tokio::test]
    async fn test_unreachable_run_returns_to_idle() {
        let session = session("a", "x");
        session.request_run().await.expect("Run should succeed in test");

        assert_eq!(session.mode(), Mode::Idle);
        assert!(session.path().is_empty());
        // 轨迹回放仍然发生：可达分量全部揭示
        assert_eq!(session.revealed(), ids(&["a", "b", "c"]));
        assert!(session
            .logs()
            .iter()
            .any(|line| line == "[ERROR] No path found"));
    }

    #[tokio::test]
    async fn test_rerun_from_settled_clears_previous_trace() {
        let session = session("a", "c");
        session.request_run().await.expect("Run should succeed in test");
        assert_eq!(session.mode(), Mode::Settled);

        session.set_end("b").expect("Setter should succeed in test");
        session.request_run().await.expect("Run should succeed in test");

        assert_eq!(session.mode(), Mode::Settled);
        assert_eq!(session.revealed(), ids(&["a", "b"]));
        assert_eq!(session.path(), ids(&["a", "b"]));
        assert_eq!(session.distance(), 1.0);
    }

    #[tokio::test]
    async fn test_overlay_lifecycle() {
        let session = session("a", "c");

        // 浮层只能从Settled进入
        assert!(matches!(
            session.show_overlay(),
            Err(SessionError::InvalidTransition { .. })
        ));

        session.request_run().await.expect("Run should succeed in test");
        session.show_overlay().expect("Overlay should open in test");
        assert_eq!(session.mode(), Mode::Overlay);

        // 浮层期间禁止配置与运行
        assert!(session.set_algorithm(Algorithm::Bfs).is_err());
        assert!(session.request_run().await.is_err());

        session.confirm_overlay().expect("Overlay should close in test");
        assert_eq!(session.mode(), Mode::Closed);

        // 终态只能通过重置离开
        assert!(session.show_overlay().is_err());
        assert!(session.request_run().await.is_err());

        session.reset();
        assert_eq!(session.mode(), Mode::Idle);
        assert!(session.logs().is_empty());
    }

    #[test]
    fn test_setter_guards_and_validation() {
        let session = session("a", "c");

        assert!(session.set_algorithm(Algorithm::AStar).is_ok());
        assert!(session.set_speed_preset(SpeedPreset::Fast).is_ok());
        assert_eq!(session.speed_ms(), 100);

        assert!(matches!(
            session.set_speed_ms(0),
            Err(SessionError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            session.set_start("missing"),
            Err(SessionError::UnknownNode(id)) if id == "missing"
        ));
    }

    /// 在第N次暂停时通过弱引用触发重置的测试节奏器
    struct CancelPacer {
        session: OnceLock<Weak<PlaybackSession>>,
        cancel_at: usize,
        calls: StdMutex<usize>,
    }

    #[async_trait::async_trait]
    impl ReplayPacer for CancelPacer {
        async fn pause(&self, _interval: Duration) {
            let count = {
                let mut calls = self.calls.lock().expect("calls lock should work in test");
                *calls += 1;
                *calls
            };
            if count == self.cancel_at {
                if let Some(session) = self.session.get().and_then(Weak::upgrade) {
                    session.reset();
                }
            }
        }
    }

    #[tokio::test]
    async fn test_reset_mid_run_cancels_replay() {
        let pacer = Arc::new(CancelPacer {
            session: OnceLock::new(),
            cancel_at: 2,
            calls: StdMutex::new(0),
        });

        struct Shared(Arc<CancelPacer>);

        #[async_trait::async_trait]
        impl ReplayPacer for Shared {
            async fn pause(&self, interval: Duration) {
                self.0.pause(interval).await;
            }
        }

        let session = Arc::new(
            PlaybackSession::with_pacer(
                chain_graph(),
                SessionOptions::new("a", "c"),
                Box::new(Shared(pacer.clone())),
            )
            .expect("Session should build in test"),
        );
        let _ = pacer.session.set(Arc::downgrade(&session));

        session.request_run().await.expect("Run should succeed in test");

        // 第二步后被重置：回到Idle，前缀与日志全部清空
        assert_eq!(session.mode(), Mode::Idle);
        assert!(session.revealed().is_empty());
        assert!(session.path().is_empty());
        assert!(session.logs().is_empty());
        assert_eq!(
            *pacer.calls.lock().expect("calls lock should work in test"),
            2
        );
    }

    /// 在每次暂停时记录已揭示前缀长度的测试节奏器
    struct ProbePacer {
        session: OnceLock<Weak<PlaybackSession>>,
        revealed_lengths: StdMutex<Vec<usize>>,
    }

    #[async_trait::async_trait]
    impl ReplayPacer for ProbePacer {
        async fn pause(&self, _interval: Duration) {
            if let Some(session) = self.session.get().and_then(Weak::upgrade) {
                self.revealed_lengths
                    .lock()
                    .expect("probe lock should work in test")
                    .push(session.revealed().len());
            }
        }
    }

    #[tokio::test]
    async fn test_replay_reveals_one_step_at_a_time() {
        let pacer = Arc::new(ProbePacer {
            session: OnceLock::new(),
            revealed_lengths: StdMutex::new(Vec::new()),
        });

        struct Shared(Arc<ProbePacer>);

        #[async_trait::async_trait]
        impl ReplayPacer for Shared {
            async fn pause(&self, interval: Duration) {
                self.0.pause(interval).await;
            }
        }

        let session = Arc::new(
            PlaybackSession::with_pacer(
                chain_graph(),
                SessionOptions::new("a", "c"),
                Box::new(Shared(pacer.clone())),
            )
            .expect("Session should build in test"),
        );
        let _ = pacer.session.set(Arc::downgrade(&session));

        session.request_run().await.expect("Run should succeed in test");

        // 每一步恰好多揭示一个节点
        let lengths = pacer
            .revealed_lengths
            .lock()
            .expect("probe lock should work in test")
            .clone();
        assert_eq!(lengths, vec![1, 2, 3]);
        assert_eq!(session.mode(), Mode::Settled);
    }
}
