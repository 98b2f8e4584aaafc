//! Maximum-weight matching in general graphs.
//!
//! # Algorithm
//!
//! Edmonds' blossom algorithm in Galil's primal-dual formulation. The
//! search runs in stages; each stage grows alternating trees from all free
//! vertices along tight edges (zero slack), shrinks odd cycles into
//! blossoms, and either finds an augmenting path or adjusts the dual
//! variables by the largest step that keeps every edge's slack
//! non-negative:
//!
//! ```text
//! slack(i, j) = u(i) + u(j) - 2 w(i, j)        (plus blossom duals)
//! ```
//!
//! Edge endpoints are numbered `2k` and `2k + 1` for edge `k`; `p ^ 1` is
//! the opposite endpoint of `p`. Blossom ids `n..2n` are recycled.
//!
//! When `max_cardinality` is set, the search does not stop while vertex
//! duals are positive, so the result is the heaviest among the
//! maximum-cardinality matchings and weights may be negative.
//!
//! # Complexity
//!
//! O(n³) for n vertices.
//!
//! # Reference
//!
//! Galil, Z. (1986). "Efficient algorithms for finding maximum matching in
//! graphs", *ACM Computing Surveys* 18(1), 23-38.

use super::Matching;

const FREE: u8 = 0;
const S: u8 = 1;
const T: u8 = 2;
// Temporary mark left by `scan_blossom` on S-blossoms it walked through.
const BREADCRUMB: u8 = 5;

#[derive(Debug, Clone, Copy)]
enum Step {
    Stop,
    Grow(usize),
    Merge(usize),
    Expand(usize),
}

/// Computes a maximum-weight matching.
///
/// `edges` holds `(u, v, weight)` with `u, v < vertex_count`. Self-loops
/// are ignored. Among matchings of equal weight the one returned is
/// implementation-defined.
///
/// # Panics
///
/// Panics if an edge endpoint is not below `vertex_count`.
///
/// # Examples
///
/// ```
/// use u_postman::matching::max_weight_matching;
///
/// // Path 0-1-2-3: the heavy middle edge loses to the two outer ones.
/// let edges = [(0, 1, 5.0), (1, 2, 8.0), (2, 3, 5.0)];
/// let m = max_weight_matching(4, &edges, false);
/// assert_eq!(m.pairs(), vec![(0, 1), (2, 3)]);
///
/// let m = max_weight_matching(4, &[(0, 1, 5.0), (1, 2, 11.0), (2, 3, 5.0)], false);
/// assert_eq!(m.pairs(), vec![(1, 2)]);
/// ```
pub fn max_weight_matching(
    vertex_count: usize,
    edges: &[(usize, usize, f64)],
    max_cardinality: bool,
) -> Matching {
    let edges: Vec<(usize, usize, f64)> = edges
        .iter()
        .copied()
        .filter(|&(u, v, _)| {
            assert!(
                u < vertex_count && v < vertex_count,
                "matching edge ({u}, {v}) outside {vertex_count} vertices"
            );
            u != v
        })
        .collect();

    if edges.is_empty() {
        return Matching::new(vec![None; vertex_count]);
    }

    let mut search = BlossomSearch::new(vertex_count, edges);
    search.run(max_cardinality);
    search.into_matching()
}

struct BlossomSearch {
    n: usize,
    edges: Vec<(usize, usize, f64)>,
    endpoint: Vec<usize>,
    neighbend: Vec<Vec<usize>>,
    // Remote endpoint of the matched edge at each vertex.
    mate: Vec<Option<usize>>,
    label: Vec<u8>,
    labelend: Vec<Option<usize>>,
    inblossom: Vec<usize>,
    parent: Vec<Option<usize>>,
    childs: Vec<Vec<usize>>,
    base: Vec<Option<usize>>,
    endps: Vec<Vec<usize>>,
    bestedge: Vec<Option<usize>>,
    blossom_bestedges: Vec<Option<Vec<usize>>>,
    unused: Vec<usize>,
    dual: Vec<f64>,
    allowedge: Vec<bool>,
    queue: Vec<usize>,
}

impl BlossomSearch {
    fn new(n: usize, edges: Vec<(usize, usize, f64)>) -> Self {
        let max_weight = edges
            .iter()
            .map(|&(_, _, w)| w)
            .fold(0.0_f64, f64::max);

        let mut endpoint = Vec::with_capacity(2 * edges.len());
        let mut neighbend = vec![Vec::new(); n];
        for (k, &(i, j, _)) in edges.iter().enumerate() {
            endpoint.push(i);
            endpoint.push(j);
            neighbend[i].push(2 * k + 1);
            neighbend[j].push(2 * k);
        }

        let mut dual = vec![max_weight; n];
        dual.extend(std::iter::repeat(0.0).take(n));

        let mut base: Vec<Option<usize>> = (0..n).map(Some).collect();
        base.extend(std::iter::repeat(None).take(n));

        let num_edges = edges.len();
        Self {
            n,
            edges,
            endpoint,
            neighbend,
            mate: vec![None; n],
            label: vec![FREE; 2 * n],
            labelend: vec![None; 2 * n],
            inblossom: (0..n).collect(),
            parent: vec![None; 2 * n],
            childs: vec![Vec::new(); 2 * n],
            base,
            endps: vec![Vec::new(); 2 * n],
            bestedge: vec![None; 2 * n],
            blossom_bestedges: vec![None; 2 * n],
            unused: (n..2 * n).collect(),
            dual,
            allowedge: vec![false; num_edges],
            queue: Vec::new(),
        }
    }

    fn into_matching(self) -> Matching {
        let endpoint = self.endpoint;
        Matching::new(
            self.mate
                .into_iter()
                .map(|p| p.map(|p| endpoint[p]))
                .collect(),
        )
    }

    fn slack(&self, k: usize) -> f64 {
        let (i, j, w) = self.edges[k];
        self.dual[i] + self.dual[j] - 2.0 * w
    }

    fn base_of(&self, b: usize) -> usize {
        self.base[b].expect("live blossom has a base")
    }

    fn leaves(&self, b: usize) -> Vec<usize> {
        let mut out = Vec::new();
        self.collect_leaves(b, &mut out);
        out
    }

    fn collect_leaves(&self, b: usize, out: &mut Vec<usize>) {
        if b < self.n {
            out.push(b);
        } else {
            for &t in &self.childs[b] {
                self.collect_leaves(t, out);
            }
        }
    }

    fn assign_label(&mut self, w: usize, t: u8, p: Option<usize>) {
        let b = self.inblossom[w];
        self.label[w] = t;
        self.label[b] = t;
        self.labelend[w] = p;
        self.labelend[b] = p;
        self.bestedge[w] = None;
        self.bestedge[b] = None;
        if t == S {
            let leaves = self.leaves(b);
            self.queue.extend(leaves);
        } else if t == T {
            let base = self.base_of(b);
            let m = self.mate[base].expect("T-blossom base is matched");
            self.assign_label(self.endpoint[m], S, Some(m ^ 1));
        }
    }

    /// Traces back from `v` and `w` towards the tree roots. Returns the
    /// base of the new blossom, or `None` when the roots differ (an
    /// augmenting path exists).
    fn scan_blossom(&mut self, v: usize, w: usize) -> Option<usize> {
        let mut path = Vec::new();
        let mut found = None;
        let mut v = Some(v);
        let mut w = Some(w);
        while let Some(cv) = v {
            let b = self.inblossom[cv];
            if self.label[b] == BREADCRUMB {
                found = Some(self.base_of(b));
                break;
            }
            path.push(b);
            self.label[b] = BREADCRUMB;
            v = self.labelend[b].map(|p| {
                let bt = self.inblossom[self.endpoint[p]];
                let q = self.labelend[bt].expect("T-blossom has a label end");
                self.endpoint[q]
            });
            if w.is_some() {
                std::mem::swap(&mut v, &mut w);
            }
        }
        for b in path {
            self.label[b] = S;
        }
        found
    }

    fn add_blossom(&mut self, base: usize, k: usize) {
        let (v, w, _) = self.edges[k];
        let bb = self.inblossom[base];
        let mut bv = self.inblossom[v];
        let mut bw = self.inblossom[w];
        let b = self.unused.pop().expect("a free blossom slot");
        self.base[b] = Some(base);
        self.parent[b] = None;
        self.parent[bb] = Some(b);

        let mut path = Vec::new();
        let mut endps = Vec::new();
        while bv != bb {
            self.parent[bv] = Some(b);
            path.push(bv);
            let le = self.labelend[bv].expect("blossom member has a label end");
            endps.push(le);
            bv = self.inblossom[self.endpoint[le]];
        }
        path.push(bb);
        path.reverse();
        endps.reverse();
        endps.push(2 * k);
        while bw != bb {
            self.parent[bw] = Some(b);
            path.push(bw);
            let le = self.labelend[bw].expect("blossom member has a label end");
            endps.push(le ^ 1);
            bw = self.inblossom[self.endpoint[le]];
        }

        self.label[b] = S;
        self.labelend[b] = self.labelend[bb];
        self.dual[b] = 0.0;
        self.childs[b] = path.clone();
        self.endps[b] = endps;

        for leaf in self.leaves(b) {
            if self.label[self.inblossom[leaf]] == T {
                // T-vertices become S-vertices inside the new blossom.
                self.queue.push(leaf);
            }
            self.inblossom[leaf] = b;
        }

        let mut bestedgeto: Vec<Option<usize>> = vec![None; 2 * self.n];
        for &bv in &path {
            let lists: Vec<Vec<usize>> = match self.blossom_bestedges[bv].take() {
                Some(list) => vec![list],
                None => self
                    .leaves(bv)
                    .into_iter()
                    .map(|leaf| self.neighbend[leaf].iter().map(|p| p / 2).collect())
                    .collect(),
            };
            for list in lists {
                for k in list {
                    let (i, j, _) = self.edges[k];
                    let j = if self.inblossom[j] == b { i } else { j };
                    let bj = self.inblossom[j];
                    if bj != b
                        && self.label[bj] == S
                        && bestedgeto[bj].map_or(true, |cur| self.slack(k) < self.slack(cur))
                    {
                        bestedgeto[bj] = Some(k);
                    }
                }
            }
            self.bestedge[bv] = None;
        }

        let list: Vec<usize> = bestedgeto.into_iter().flatten().collect();
        let mut best: Option<usize> = None;
        for &k in &list {
            if best.map_or(true, |cur| self.slack(k) < self.slack(cur)) {
                best = Some(k);
            }
        }
        self.blossom_bestedges[b] = Some(list);
        self.bestedge[b] = best;
    }

    fn expand_blossom(&mut self, b: usize, endstage: bool) {
        let childs = self.childs[b].clone();
        for &s in &childs {
            self.parent[s] = None;
            if s < self.n {
                self.inblossom[s] = s;
            } else if endstage && self.dual[s] == 0.0 {
                self.expand_blossom(s, endstage);
            } else {
                for leaf in self.leaves(s) {
                    self.inblossom[leaf] = s;
                }
            }
        }

        if !endstage && self.label[b] == T {
            // Relabel the sub-blossoms on the even-length side of the cycle
            // that the alternating tree passes through.
            let len = childs.len();
            let lb = self.labelend[b].expect("T-blossom has a label end");
            let entrychild = self.inblossom[self.endpoint[lb ^ 1]];
            let pos = childs
                .iter()
                .position(|&c| c == entrychild)
                .expect("entry child belongs to the blossom");
            let mut j = pos as isize;
            let (jstep, endptrick) = if pos & 1 == 1 {
                j -= len as isize;
                (1, 0)
            } else {
                (-1, 1)
            };

            let mut p = lb;
            while j != 0 {
                self.label[self.endpoint[p ^ 1]] = FREE;
                let q = self.endps[b][wrap(j - endptrick as isize, len)];
                self.label[self.endpoint[q ^ endptrick ^ 1]] = FREE;
                self.assign_label(self.endpoint[p ^ 1], T, Some(p));
                self.allowedge[q / 2] = true;
                j += jstep;
                p = self.endps[b][wrap(j - endptrick as isize, len)] ^ endptrick;
                self.allowedge[p / 2] = true;
                j += jstep;
            }

            let bv = childs[wrap(j, len)];
            let entry = self.endpoint[p ^ 1];
            self.label[entry] = T;
            self.label[bv] = T;
            self.labelend[entry] = Some(p);
            self.labelend[bv] = Some(p);
            self.bestedge[bv] = None;

            j += jstep;
            while childs[wrap(j, len)] != entrychild {
                let bv = childs[wrap(j, len)];
                if self.label[bv] == S {
                    j += jstep;
                    continue;
                }
                let reached = self
                    .leaves(bv)
                    .into_iter()
                    .find(|&leaf| self.label[leaf] != FREE);
                if let Some(v) = reached {
                    self.label[v] = FREE;
                    let m = self.mate[self.base_of(bv)].expect("sub-blossom base is matched");
                    self.label[self.endpoint[m]] = FREE;
                    self.assign_label(v, T, self.labelend[v]);
                }
                j += jstep;
            }
        }

        self.label[b] = FREE;
        self.labelend[b] = None;
        self.childs[b] = Vec::new();
        self.endps[b] = Vec::new();
        self.base[b] = None;
        self.blossom_bestedges[b] = None;
        self.bestedge[b] = None;
        self.unused.push(b);
    }

    /// Swaps matched and unmatched edges along the even path from `v` to
    /// the base of blossom `b`, then makes `v` the new base.
    fn augment_blossom(&mut self, b: usize, v: usize) {
        let mut t = v;
        while self.parent[t] != Some(b) {
            t = self.parent[t].expect("vertex lies inside the blossom");
        }
        if t >= self.n {
            self.augment_blossom(t, v);
        }

        let len = self.childs[b].len();
        let i = self.childs[b]
            .iter()
            .position(|&c| c == t)
            .expect("child belongs to the blossom");
        let mut j = i as isize;
        let (jstep, endptrick) = if i & 1 == 1 {
            j -= len as isize;
            (1, 0)
        } else {
            (-1, 1)
        };

        while j != 0 {
            j += jstep;
            let t = self.childs[b][wrap(j, len)];
            let p = self.endps[b][wrap(j - endptrick as isize, len)] ^ endptrick;
            if t >= self.n {
                self.augment_blossom(t, self.endpoint[p]);
            }
            j += jstep;
            let t = self.childs[b][wrap(j, len)];
            if t >= self.n {
                self.augment_blossom(t, self.endpoint[p ^ 1]);
            }
            self.mate[self.endpoint[p]] = Some(p ^ 1);
            self.mate[self.endpoint[p ^ 1]] = Some(p);
        }

        self.childs[b].rotate_left(i);
        self.endps[b].rotate_left(i);
        self.base[b] = self.base[self.childs[b][0]];
    }

    fn augment_matching(&mut self, k: usize) {
        let (v, w, _) = self.edges[k];
        for (mut s, mut p) in [(v, 2 * k + 1), (w, 2 * k)] {
            loop {
                let bs = self.inblossom[s];
                if bs >= self.n {
                    self.augment_blossom(bs, s);
                }
                self.mate[s] = Some(p);
                let Some(le) = self.labelend[bs] else {
                    // Reached a tree root.
                    break;
                };
                let bt = self.inblossom[self.endpoint[le]];
                let lt = self.labelend[bt].expect("T-blossom has a label end");
                s = self.endpoint[lt];
                let j = self.endpoint[lt ^ 1];
                if bt >= self.n {
                    self.augment_blossom(bt, j);
                }
                self.mate[j] = Some(lt);
                p = lt ^ 1;
            }
        }
    }

    fn run(&mut self, max_cardinality: bool) {
        let n = self.n;
        for _ in 0..n {
            self.label.fill(FREE);
            self.bestedge.fill(None);
            for slot in &mut self.blossom_bestedges[n..] {
                *slot = None;
            }
            self.allowedge.fill(false);
            self.queue.clear();

            for v in 0..n {
                if self.mate[v].is_none() && self.label[self.inblossom[v]] == FREE {
                    self.assign_label(v, S, None);
                }
            }

            let mut augmented = false;
            loop {
                while !augmented {
                    let Some(v) = self.queue.pop() else {
                        break;
                    };
                    augmented = self.scan_vertex(v);
                }
                if augmented {
                    break;
                }

                let (delta, step) = self.next_delta(max_cardinality);
                for v in 0..n {
                    match self.label[self.inblossom[v]] {
                        S => self.dual[v] -= delta,
                        T => self.dual[v] += delta,
                        _ => {}
                    }
                }
                for b in n..2 * n {
                    if self.base[b].is_some() && self.parent[b].is_none() {
                        match self.label[b] {
                            S => self.dual[b] += delta,
                            T => self.dual[b] -= delta,
                            _ => {}
                        }
                    }
                }

                match step {
                    Step::Stop => break,
                    Step::Grow(k) => {
                        self.allowedge[k] = true;
                        let (i, j, _) = self.edges[k];
                        let i = if self.label[self.inblossom[i]] == FREE {
                            j
                        } else {
                            i
                        };
                        self.queue.push(i);
                    }
                    Step::Merge(k) => {
                        self.allowedge[k] = true;
                        let (i, _, _) = self.edges[k];
                        self.queue.push(i);
                    }
                    Step::Expand(b) => self.expand_blossom(b, false),
                }
            }

            if !augmented {
                break;
            }

            for b in n..2 * n {
                if self.parent[b].is_none()
                    && self.base[b].is_some()
                    && self.label[b] == S
                    && self.dual[b] == 0.0
                {
                    self.expand_blossom(b, true);
                }
            }
        }
    }

    /// Scans the edges of S-vertex `v`. Returns `true` if the matching was
    /// augmented.
    fn scan_vertex(&mut self, v: usize) -> bool {
        for idx in 0..self.neighbend[v].len() {
            let p = self.neighbend[v][idx];
            let k = p / 2;
            let w = self.endpoint[p];
            if self.inblossom[v] == self.inblossom[w] {
                continue;
            }

            let mut kslack = 0.0;
            if !self.allowedge[k] {
                kslack = self.slack(k);
                if kslack <= 0.0 {
                    self.allowedge[k] = true;
                }
            }

            if self.allowedge[k] {
                let bw_label = self.label[self.inblossom[w]];
                if bw_label == FREE {
                    self.assign_label(w, T, Some(p ^ 1));
                } else if bw_label == S {
                    match self.scan_blossom(v, w) {
                        Some(base) => self.add_blossom(base, k),
                        None => {
                            self.augment_matching(k);
                            return true;
                        }
                    }
                } else if self.label[w] == FREE {
                    // w is inside a T-blossom but not yet reached.
                    self.label[w] = T;
                    self.labelend[w] = Some(p ^ 1);
                }
            } else if self.label[self.inblossom[w]] == S {
                let b = self.inblossom[v];
                if self.bestedge[b].map_or(true, |cur| kslack < self.slack(cur)) {
                    self.bestedge[b] = Some(k);
                }
            } else if self.label[w] == FREE
                && self.bestedge[w].map_or(true, |cur| kslack < self.slack(cur))
            {
                self.bestedge[w] = Some(k);
            }
        }
        false
    }

    fn next_delta(&self, max_cardinality: bool) -> (f64, Step) {
        let n = self.n;
        let min_vertex_dual = self.dual[..n].iter().copied().fold(f64::INFINITY, f64::min);
        let mut best: Option<(f64, Step)> = None;
        let offer = |d: f64, step: Step, best: &mut Option<(f64, Step)>| {
            if best.map_or(true, |(cur, _)| d < cur) {
                *best = Some((d, step));
            }
        };

        if !max_cardinality {
            best = Some((min_vertex_dual, Step::Stop));
        }

        for v in 0..n {
            if self.label[self.inblossom[v]] == FREE {
                if let Some(k) = self.bestedge[v] {
                    offer(self.slack(k), Step::Grow(k), &mut best);
                }
            }
        }

        for b in 0..2 * n {
            if self.parent[b].is_none() && self.label[b] == S {
                if let Some(k) = self.bestedge[b] {
                    offer(self.slack(k) / 2.0, Step::Merge(k), &mut best);
                }
            }
        }

        for b in n..2 * n {
            if self.base[b].is_some() && self.parent[b].is_none() && self.label[b] == T {
                offer(self.dual[b], Step::Expand(b), &mut best);
            }
        }

        best.unwrap_or((min_vertex_dual.max(0.0), Step::Stop))
    }
}

/// Python-style index into a cyclic list of length `len`.
fn wrap(j: isize, len: usize) -> usize {
    j.rem_euclid(len as isize) as usize
}
