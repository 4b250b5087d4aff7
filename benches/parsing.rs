//! Benchmarks for parsing helper program output.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use myip::address::scan_ifconfig;
use myip::config::Family;
use myip::interfaces::{parse_default_route, parse_interface_headers};
use std::hint::black_box;

/// Generate `ifconfig -a` style output for `count` interfaces
fn generate_ifconfig_a(count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                "en{i}: flags=8863<UP,BROADCAST,SMART,RUNNING,SIMPLEX,MULTICAST> mtu 1500\n\
                 \tether 3c:22:fb:00:{:02x}:{:02x}\n\
                 \tinet6 fe80::{:x}%en{i} prefixlen 64 scopeid 0x{:x}\n\
                 \tinet 10.{}.{}.1 netmask 0xffffff00 broadcast 10.{}.{}.255\n\
                 \tstatus: active\n",
                (i / 256) % 256,
                i % 256,
                i + 1,
                i + 4,
                (i / 256) % 256,
                i % 256,
                (i / 256) % 256,
                i % 256,
            )
        })
        .collect()
}

/// Generate a Linux routing table with the default route last
fn generate_route_table(count: usize) -> String {
    let mut table = String::from(
        "Kernel IP routing table\n\
         Destination     Gateway         Genmask         Flags Metric Ref    Use Iface\n",
    );
    for i in 0..count {
        table.push_str(&format!(
            "10.{}.{}.0        0.0.0.0         255.255.255.0   U     100    0        0 eth{}\n",
            (i / 256) % 256,
            i % 256,
            i
        ));
    }
    table.push_str("0.0.0.0         10.0.0.1        0.0.0.0         UG    100    0        0 eth0\n");
    table
}

fn bench_interface_headers(c: &mut Criterion) {
    let mut group = c.benchmark_group("interface_headers");

    for size in [4, 64, 1024] {
        let output = generate_ifconfig_a(size);
        group.bench_with_input(BenchmarkId::new("ifconfig_a", size), &output, |b, output| {
            b.iter(|| black_box(parse_interface_headers(black_box(output))));
        });
    }

    group.finish();
}

fn bench_scan_ifconfig(c: &mut Criterion) {
    let output = generate_ifconfig_a(1);

    c.bench_function("scan_ifconfig_any", |b| {
        b.iter(|| black_box(scan_ifconfig(black_box(&output), Family::Any)))
    });
    c.bench_function("scan_ifconfig_v6", |b| {
        b.iter(|| black_box(scan_ifconfig(black_box(&output), Family::V6Only)))
    });
}

fn bench_default_route(c: &mut Criterion) {
    let mut group = c.benchmark_group("default_route");

    for size in [8, 256, 4096] {
        let table = generate_route_table(size);
        group.bench_with_input(BenchmarkId::new("route_n", size), &table, |b, table| {
            b.iter(|| black_box(parse_default_route(black_box(table))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_interface_headers,
    bench_scan_ifconfig,
    bench_default_route
);
criterion_main!(benches);
